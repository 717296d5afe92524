// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Overview statistics and panels.

use diesel::SqliteConnection;
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Nullable, Text};
use gesttransport_domain::{OverviewStats, RecentTicket, TicketStatus, UpcomingRoute};

use super::tickets::parse_status;
use crate::diesel_schema::{clients, drivers, routes, tickets, vehicles};
use crate::error::PersistenceError;

#[derive(QueryableByName)]
struct RecentTicketRow {
    #[diesel(sql_type = BigInt)]
    id: i64,
    #[diesel(sql_type = Nullable<Text>)]
    client_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    departure_city: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    arrival_city: Option<String>,
    #[diesel(sql_type = Double)]
    amount: f64,
    #[diesel(sql_type = Text)]
    sold_at: String,
    #[diesel(sql_type = Text)]
    status: String,
}

#[derive(QueryableByName)]
struct UpcomingRouteRow {
    #[diesel(sql_type = BigInt)]
    id: i64,
    #[diesel(sql_type = Nullable<Text>)]
    departure_city: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    arrival_city: Option<String>,
    #[diesel(sql_type = Text)]
    departure_time: String,
    #[diesel(sql_type = Nullable<Text>)]
    driver_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    vehicle_plate: Option<String>,
}

const RECENT_TICKETS_SQL: &str = "
    SELECT t.id,
           cl.last_name || ' ' || cl.first_name AS client_name,
           dc.name AS departure_city,
           ac.name AS arrival_city,
           t.amount,
           t.sold_at,
           t.status
    FROM tickets t
    LEFT JOIN clients cl ON cl.id = t.client_id
    LEFT JOIN routes r ON r.id = t.route_id
    LEFT JOIN cities dc ON dc.id = r.departure_city_id
    LEFT JOIN cities ac ON ac.id = r.arrival_city_id
    ORDER BY t.id DESC
    LIMIT ?";

const UPCOMING_ROUTES_SQL: &str = "
    SELECT r.id,
           dc.name AS departure_city,
           ac.name AS arrival_city,
           r.departure_time,
           d.last_name || ' ' || d.first_name AS driver_name,
           v.plate AS vehicle_plate
    FROM routes r
    LEFT JOIN cities dc ON dc.id = r.departure_city_id
    LEFT JOIN cities ac ON ac.id = r.arrival_city_id
    LEFT JOIN drivers d ON d.id = r.driver_id
    LEFT JOIN vehicles v ON v.id = r.vehicle_id
    WHERE r.departure_time >= ?
    ORDER BY r.departure_time ASC, r.id ASC
    LIMIT ?";

/// Computes the overview statistics from current rows.
///
/// # Errors
///
/// Returns an error if a count or sum fails.
pub fn overview_stats(conn: &mut SqliteConnection) -> Result<OverviewStats, PersistenceError> {
    let paid_tickets: i64 = tickets::table
        .filter(tickets::status.eq(TicketStatus::Paid.as_str()))
        .count()
        .get_result(conn)?;
    let cancelled_tickets: i64 = tickets::table
        .filter(tickets::status.eq(TicketStatus::Cancelled.as_str()))
        .count()
        .get_result(conn)?;
    let revenue: Option<f64> = tickets::table
        .filter(tickets::status.eq(TicketStatus::Paid.as_str()))
        .select(sum(tickets::amount))
        .first(conn)?;

    Ok(OverviewStats {
        paid_tickets,
        cancelled_tickets,
        revenue: revenue.unwrap_or(0.0),
        routes: routes::table.count().get_result(conn)?,
        clients: clients::table.count().get_result(conn)?,
        drivers: drivers::table.count().get_result(conn)?,
        vehicles: vehicles::table.count().get_result(conn)?,
    })
}

/// Returns the most recent tickets, newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored status is unknown.
pub fn recent_tickets(
    conn: &mut SqliteConnection,
    limit: i64,
) -> Result<Vec<RecentTicket>, PersistenceError> {
    let rows: Vec<RecentTicketRow> = diesel::sql_query(RECENT_TICKETS_SQL)
        .bind::<BigInt, _>(limit)
        .load(conn)?;

    rows.into_iter()
        .map(|row| {
            Ok(RecentTicket {
                id: row.id,
                client_name: row.client_name,
                departure_city: row.departure_city,
                arrival_city: row.arrival_city,
                amount: row.amount,
                sold_at: row.sold_at,
                status: parse_status(&row.status)?,
            })
        })
        .collect()
}

/// Returns routes departing at or after `now`, soonest first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `now` - The reference time in storage form (`YYYY-MM-DD HH:MM`)
/// * `limit` - Maximum number of routes
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn upcoming_routes(
    conn: &mut SqliteConnection,
    now: &str,
    limit: i64,
) -> Result<Vec<UpcomingRoute>, PersistenceError> {
    let rows: Vec<UpcomingRouteRow> = diesel::sql_query(UPCOMING_ROUTES_SQL)
        .bind::<Text, _>(now)
        .bind::<BigInt, _>(limit)
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| UpcomingRoute {
            id: row.id,
            departure_city: row.departure_city,
            arrival_city: row.arrival_city,
            departure_time: row.departure_time,
            driver_name: row.driver_name,
            vehicle_plate: row.vehicle_plate,
        })
        .collect())
}
