// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! City and route queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Integer, Nullable, Text};
use gesttransport_domain::{Choice, City, Route, RouteRow, route_label};
use tracing::debug;

use super::filter_binds;
use crate::diesel_schema::{cities, routes};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = routes)]
struct RouteRecord {
    id: i64,
    departure_city_id: Option<i64>,
    arrival_city_id: Option<i64>,
    departure_time: String,
    arrival_time: String,
    vehicle_id: Option<i64>,
    driver_id: Option<i64>,
    price: f64,
}

#[derive(QueryableByName)]
struct RouteListRow {
    #[diesel(sql_type = BigInt)]
    id: i64,
    #[diesel(sql_type = Nullable<Text>)]
    departure_city: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    arrival_city: Option<String>,
    #[diesel(sql_type = Text)]
    departure_time: String,
    #[diesel(sql_type = Text)]
    arrival_time: String,
    #[diesel(sql_type = Nullable<Text>)]
    driver_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    vehicle_plate: Option<String>,
    #[diesel(sql_type = Double)]
    price: f64,
    #[diesel(sql_type = Nullable<Integer>)]
    seat_count: Option<i32>,
}

#[derive(QueryableByName)]
struct RouteChoiceRow {
    #[diesel(sql_type = BigInt)]
    id: i64,
    #[diesel(sql_type = Nullable<Text>)]
    departure_city: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    arrival_city: Option<String>,
    #[diesel(sql_type = Text)]
    departure_time: String,
}

const LIST_ROUTES_SQL: &str = "
    SELECT r.id,
           dc.name AS departure_city,
           ac.name AS arrival_city,
           r.departure_time,
           r.arrival_time,
           d.last_name || ' ' || d.first_name AS driver_name,
           v.plate AS vehicle_plate,
           r.price,
           v.seat_count
    FROM routes r
    LEFT JOIN cities dc ON dc.id = r.departure_city_id
    LEFT JOIN cities ac ON ac.id = r.arrival_city_id
    LEFT JOIN drivers d ON d.id = r.driver_id
    LEFT JOIN vehicles v ON v.id = r.vehicle_id
    WHERE (? = '' OR dc.name LIKE ? OR ac.name LIKE ?)
    ORDER BY r.id DESC";

const ROUTE_CHOICES_SQL: &str = "
    SELECT r.id, dc.name AS departure_city, ac.name AS arrival_city, r.departure_time
    FROM routes r
    LEFT JOIN cities dc ON dc.id = r.departure_city_id
    LEFT JOIN cities ac ON ac.id = r.arrival_city_id
    ORDER BY r.departure_time DESC, r.id DESC";

/// Lists routes newest first, filtered on departure or arrival city name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_routes(
    conn: &mut SqliteConnection,
    filter: &str,
) -> Result<Vec<RouteRow>, PersistenceError> {
    let (text, pattern) = filter_binds(filter);

    let rows: Vec<RouteListRow> = diesel::sql_query(LIST_ROUTES_SQL)
        .bind::<Text, _>(&text)
        .bind::<Text, _>(&pattern)
        .bind::<Text, _>(&pattern)
        .load(conn)?;

    debug!(count = rows.len(), "Listed routes");
    Ok(rows
        .into_iter()
        .map(|row| RouteRow {
            id: row.id,
            departure_city: row.departure_city,
            arrival_city: row.arrival_city,
            departure_time: row.departure_time,
            arrival_time: row.arrival_time,
            driver_name: row.driver_name,
            vehicle_plate: row.vehicle_plate,
            price: row.price,
            seat_count: row.seat_count,
        })
        .collect())
}

/// Retrieves a route by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the route is not found.
pub fn get_route(
    conn: &mut SqliteConnection,
    route_id: i64,
) -> Result<Option<Route>, PersistenceError> {
    let record: Option<RouteRecord> = routes::table
        .find(route_id)
        .select(RouteRecord::as_select())
        .first(conn)
        .optional()?;

    Ok(record.map(|record| Route {
        id: record.id,
        departure_city_id: record.departure_city_id,
        arrival_city_id: record.arrival_city_id,
        departure_time: record.departure_time,
        arrival_time: record.arrival_time,
        vehicle_id: record.vehicle_id,
        driver_id: record.driver_id,
        price: record.price,
    }))
}

/// Route selector entries for the sale form, latest departure first.
///
/// Labels read `Dakar → Thiès (2026-03-01 08:00)`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn route_choices(conn: &mut SqliteConnection) -> Result<Vec<Choice>, PersistenceError> {
    let rows: Vec<RouteChoiceRow> = diesel::sql_query(ROUTE_CHOICES_SQL).load(conn)?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let label: String = format!(
                "{} ({})",
                route_label(row.departure_city.as_deref(), row.arrival_city.as_deref()),
                row.departure_time
            );
            Choice::new(row.id, label)
        })
        .collect())
}

/// Lists all cities sorted by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_cities(conn: &mut SqliteConnection) -> Result<Vec<City>, PersistenceError> {
    let rows: Vec<(i64, String)> = cities::table
        .select((cities::id, cities::name))
        .order(cities::name.asc())
        .load(conn)?;
    Ok(rows
        .into_iter()
        .map(|(id, name)| City { id, name })
        .collect())
}

/// Finds a city by its exact name.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no city has this name.
pub fn find_city_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<City>, PersistenceError> {
    let row: Option<(i64, String)> = cities::table
        .filter(cities::name.eq(name))
        .select((cities::id, cities::name))
        .first(conn)
        .optional()?;
    Ok(row.map(|(id, name)| City { id, name }))
}

/// City selector entries sorted by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn city_choices(conn: &mut SqliteConnection) -> Result<Vec<Choice>, PersistenceError> {
    Ok(list_cities(conn)?
        .into_iter()
        .map(|city| Choice::new(city.id, city.name))
        .collect())
}
