// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vehicle and driver mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gesttransport_domain::{DriverDraft, VehicleDraft, non_blank};
use tracing::info;

use super::require_affected;
use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{drivers, vehicles};
use crate::error::PersistenceError;

/// Inserts a vehicle and returns its id.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the plate is taken.
pub fn create_vehicle(
    conn: &mut SqliteConnection,
    draft: &VehicleDraft,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(vehicles::table)
        .values((
            vehicles::plate.eq(draft.plate.trim()),
            vehicles::seat_count.eq(draft.seat_count),
            vehicles::vehicle_type.eq(non_blank(&draft.vehicle_type)),
            vehicles::company_id.eq(draft.company_id),
        ))
        .execute(conn)?;

    let vehicle_id: i64 = get_last_insert_rowid(conn)?;
    info!(vehicle_id, plate = %draft.plate, "Created vehicle");
    Ok(vehicle_id)
}

/// Replaces every field of a vehicle.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the plate is taken and
/// `PersistenceError::NotFound` if no vehicle has this id.
pub fn update_vehicle(
    conn: &mut SqliteConnection,
    vehicle_id: i64,
    draft: &VehicleDraft,
) -> Result<(), PersistenceError> {
    let affected: usize = diesel::update(vehicles::table.find(vehicle_id))
        .set((
            vehicles::plate.eq(draft.plate.trim()),
            vehicles::seat_count.eq(draft.seat_count),
            vehicles::vehicle_type.eq(non_blank(&draft.vehicle_type)),
            vehicles::company_id.eq(draft.company_id),
        ))
        .execute(conn)?;

    require_affected(affected, "vehicle", vehicle_id)?;
    info!(vehicle_id, "Updated vehicle");
    Ok(())
}

/// Deletes a vehicle. Routes keep the stale reference.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no vehicle has this id.
pub fn delete_vehicle(conn: &mut SqliteConnection, vehicle_id: i64) -> Result<(), PersistenceError> {
    let affected: usize = diesel::delete(vehicles::table.find(vehicle_id)).execute(conn)?;
    require_affected(affected, "vehicle", vehicle_id)?;
    info!(vehicle_id, "Deleted vehicle");
    Ok(())
}

/// Inserts a driver and returns its id.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the badge is taken.
pub fn create_driver(
    conn: &mut SqliteConnection,
    draft: &DriverDraft,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(drivers::table)
        .values((
            drivers::last_name.eq(draft.last_name.trim()),
            drivers::first_name.eq(draft.first_name.trim()),
            drivers::badge.eq(non_blank(&draft.badge)),
            drivers::license_number.eq(non_blank(&draft.license_number)),
            drivers::hire_date.eq(non_blank(&draft.hire_date)),
            drivers::company_id.eq(draft.company_id),
        ))
        .execute(conn)?;

    let driver_id: i64 = get_last_insert_rowid(conn)?;
    info!(driver_id, "Created driver");
    Ok(driver_id)
}

/// Replaces every field of a driver.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the badge is taken and
/// `PersistenceError::NotFound` if no driver has this id.
pub fn update_driver(
    conn: &mut SqliteConnection,
    driver_id: i64,
    draft: &DriverDraft,
) -> Result<(), PersistenceError> {
    let affected: usize = diesel::update(drivers::table.find(driver_id))
        .set((
            drivers::last_name.eq(draft.last_name.trim()),
            drivers::first_name.eq(draft.first_name.trim()),
            drivers::badge.eq(non_blank(&draft.badge)),
            drivers::license_number.eq(non_blank(&draft.license_number)),
            drivers::hire_date.eq(non_blank(&draft.hire_date)),
            drivers::company_id.eq(draft.company_id),
        ))
        .execute(conn)?;

    require_affected(affected, "driver", driver_id)?;
    info!(driver_id, "Updated driver");
    Ok(())
}

/// Deletes a driver. Routes keep the stale reference.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no driver has this id.
pub fn delete_driver(conn: &mut SqliteConnection, driver_id: i64) -> Result<(), PersistenceError> {
    let affected: usize = diesel::delete(drivers::table.find(driver_id)).execute(conn)?;
    require_affected(affected, "driver", driver_id)?;
    info!(driver_id, "Deleted driver");
    Ok(())
}
