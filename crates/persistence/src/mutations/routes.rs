// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! City and route mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gesttransport_domain::RouteDraft;
use tracing::info;

use super::require_affected;
use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{cities, routes};
use crate::error::PersistenceError;

/// Inserts a city and returns its id.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the name is taken.
pub fn create_city(conn: &mut SqliteConnection, name: &str) -> Result<i64, PersistenceError> {
    diesel::insert_into(cities::table)
        .values(cities::name.eq(name.trim()))
        .execute(conn)?;

    let city_id: i64 = get_last_insert_rowid(conn)?;
    info!(city_id, name = %name.trim(), "Created city");
    Ok(city_id)
}

/// Inserts a route and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_route(
    conn: &mut SqliteConnection,
    draft: &RouteDraft,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(routes::table)
        .values((
            routes::departure_city_id.eq(draft.departure_city_id),
            routes::arrival_city_id.eq(draft.arrival_city_id),
            routes::departure_time.eq(&draft.departure_time),
            routes::arrival_time.eq(&draft.arrival_time),
            routes::vehicle_id.eq(draft.vehicle_id),
            routes::driver_id.eq(draft.driver_id),
            routes::price.eq(draft.price),
        ))
        .execute(conn)?;

    let route_id: i64 = get_last_insert_rowid(conn)?;
    info!(route_id, departure = %draft.departure_time, "Created route");
    Ok(route_id)
}

/// Replaces every field of a route.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no route has this id.
pub fn update_route(
    conn: &mut SqliteConnection,
    route_id: i64,
    draft: &RouteDraft,
) -> Result<(), PersistenceError> {
    let affected: usize = diesel::update(routes::table.find(route_id))
        .set((
            routes::departure_city_id.eq(draft.departure_city_id),
            routes::arrival_city_id.eq(draft.arrival_city_id),
            routes::departure_time.eq(&draft.departure_time),
            routes::arrival_time.eq(&draft.arrival_time),
            routes::vehicle_id.eq(draft.vehicle_id),
            routes::driver_id.eq(draft.driver_id),
            routes::price.eq(draft.price),
        ))
        .execute(conn)?;

    require_affected(affected, "route", route_id)?;
    info!(route_id, "Updated route");
    Ok(())
}

/// Deletes a route. Tickets sold on it keep the stale reference.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no route has this id.
pub fn delete_route(conn: &mut SqliteConnection, route_id: i64) -> Result<(), PersistenceError> {
    let affected: usize = diesel::delete(routes::table.find(route_id)).execute(conn)?;
    require_affected(affected, "route", route_id)?;
    info!(route_id, "Deleted route");
    Ok(())
}
