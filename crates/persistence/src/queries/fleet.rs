// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vehicle and driver queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gesttransport_domain::{Choice, Driver, DriverRow, Vehicle, VehicleRow, full_name};
use tracing::debug;

use super::like_pattern;
use crate::diesel_schema::{companies, drivers, vehicles};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = vehicles)]
struct VehicleRecord {
    id: i64,
    plate: String,
    seat_count: i32,
    vehicle_type: Option<String>,
    company_id: Option<i64>,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = drivers)]
struct DriverRecord {
    id: i64,
    last_name: String,
    first_name: String,
    badge: Option<String>,
    license_number: Option<String>,
    hire_date: Option<String>,
    company_id: Option<i64>,
}

type VehicleListTuple = (i64, String, i32, Option<String>, Option<String>);

type DriverListTuple = (
    i64,
    String,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

/// Lists vehicles with their company name, filtered on plate and type.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_vehicles(
    conn: &mut SqliteConnection,
    filter: &str,
) -> Result<Vec<VehicleRow>, PersistenceError> {
    let mut query = vehicles::table
        .left_join(companies::table)
        .select((
            vehicles::id,
            vehicles::plate,
            vehicles::seat_count,
            vehicles::vehicle_type,
            companies::name.nullable(),
        ))
        .order(vehicles::id.asc())
        .into_boxed();

    if let Some(pattern) = like_pattern(filter) {
        query = query.filter(
            vehicles::plate
                .like(pattern.clone())
                .or(vehicles::vehicle_type.like(pattern)),
        );
    }

    let rows: Vec<VehicleListTuple> = query.load(conn)?;
    debug!(count = rows.len(), "Listed vehicles");
    Ok(rows
        .into_iter()
        .map(
            |(id, plate, seat_count, vehicle_type, company_name)| VehicleRow {
                id,
                plate,
                seat_count,
                vehicle_type,
                company_name,
            },
        )
        .collect())
}

/// Retrieves a vehicle by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the vehicle is not found.
pub fn get_vehicle(
    conn: &mut SqliteConnection,
    vehicle_id: i64,
) -> Result<Option<Vehicle>, PersistenceError> {
    let record: Option<VehicleRecord> = vehicles::table
        .find(vehicle_id)
        .select(VehicleRecord::as_select())
        .first(conn)
        .optional()?;

    Ok(record.map(|record| Vehicle {
        id: record.id,
        plate: record.plate,
        seat_count: record.seat_count,
        vehicle_type: record.vehicle_type,
        company_id: record.company_id,
    }))
}

/// Vehicle selector entries, labelled `plate (N seats)`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn vehicle_choices(conn: &mut SqliteConnection) -> Result<Vec<Choice>, PersistenceError> {
    let rows: Vec<(i64, String, i32)> = vehicles::table
        .select((vehicles::id, vehicles::plate, vehicles::seat_count))
        .order(vehicles::plate.asc())
        .load(conn)?;
    Ok(rows
        .into_iter()
        .map(|(id, plate, seats)| Choice::new(id, format!("{plate} ({seats} seats)")))
        .collect())
}

/// Lists drivers with their company name, filtered on names and badge.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_drivers(
    conn: &mut SqliteConnection,
    filter: &str,
) -> Result<Vec<DriverRow>, PersistenceError> {
    let mut query = drivers::table
        .left_join(companies::table)
        .select((
            drivers::id,
            drivers::last_name,
            drivers::first_name,
            drivers::badge,
            drivers::license_number,
            drivers::hire_date,
            companies::name.nullable(),
        ))
        .order(drivers::id.asc())
        .into_boxed();

    if let Some(pattern) = like_pattern(filter) {
        query = query.filter(
            drivers::last_name
                .like(pattern.clone())
                .or(drivers::first_name.like(pattern.clone()))
                .or(drivers::badge.like(pattern)),
        );
    }

    let rows: Vec<DriverListTuple> = query.load(conn)?;
    debug!(count = rows.len(), "Listed drivers");
    Ok(rows
        .into_iter()
        .map(
            |(id, last_name, first_name, badge, license_number, hire_date, company_name)| {
                DriverRow {
                    id,
                    last_name,
                    first_name,
                    badge,
                    license_number,
                    hire_date,
                    company_name,
                }
            },
        )
        .collect())
}

/// Retrieves a driver by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the driver is not found.
pub fn get_driver(
    conn: &mut SqliteConnection,
    driver_id: i64,
) -> Result<Option<Driver>, PersistenceError> {
    let record: Option<DriverRecord> = drivers::table
        .find(driver_id)
        .select(DriverRecord::as_select())
        .first(conn)
        .optional()?;

    Ok(record.map(|record| Driver {
        id: record.id,
        last_name: record.last_name,
        first_name: record.first_name,
        badge: record.badge,
        license_number: record.license_number,
        hire_date: record.hire_date,
        company_id: record.company_id,
    }))
}

/// Driver selector entries, labelled with the full name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn driver_choices(conn: &mut SqliteConnection) -> Result<Vec<Choice>, PersistenceError> {
    let rows: Vec<(i64, String, String)> = drivers::table
        .select((drivers::id, drivers::last_name, drivers::first_name))
        .order((drivers::last_name.asc(), drivers::first_name.asc()))
        .load(conn)?;
    Ok(rows
        .into_iter()
        .map(|(id, last_name, first_name)| Choice::new(id, full_name(&last_name, &first_name)))
        .collect())
}
