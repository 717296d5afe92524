// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket list, lookup and receipt queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Integer, Nullable, Text};
use gesttransport_domain::{ReceiptData, StatusFilter, Ticket, TicketRow, TicketStatus};
use tracing::debug;

use super::filter_binds;
use crate::diesel_schema::tickets;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = tickets)]
struct TicketRecord {
    id: i64,
    sold_at: String,
    seat: i32,
    amount: f64,
    status: String,
    route_id: i64,
    client_id: i64,
    user_id: Option<i64>,
}

#[derive(QueryableByName)]
struct TicketListRow {
    #[diesel(sql_type = BigInt)]
    id: i64,
    #[diesel(sql_type = Text)]
    sold_at: String,
    #[diesel(sql_type = Nullable<Text>)]
    client_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    departure_city: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    arrival_city: Option<String>,
    #[diesel(sql_type = Integer)]
    seat: i32,
    #[diesel(sql_type = Double)]
    amount: f64,
    #[diesel(sql_type = Text)]
    status: String,
    #[diesel(sql_type = Nullable<Text>)]
    operator_name: Option<String>,
}

#[derive(QueryableByName)]
struct ReceiptRow {
    #[diesel(sql_type = BigInt)]
    id: i64,
    #[diesel(sql_type = Text)]
    sold_at: String,
    #[diesel(sql_type = Nullable<Text>)]
    client_last_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    client_first_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    client_phone: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    departure_city: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    arrival_city: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    departure_time: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    arrival_time: Option<String>,
    #[diesel(sql_type = Integer)]
    seat: i32,
    #[diesel(sql_type = Nullable<Text>)]
    driver_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    vehicle_plate: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    vehicle_type: Option<String>,
    #[diesel(sql_type = Double)]
    amount: f64,
    #[diesel(sql_type = Text)]
    status: String,
}

const LIST_TICKETS_SQL: &str = "
    SELECT t.id,
           t.sold_at,
           cl.last_name || ' ' || cl.first_name AS client_name,
           dc.name AS departure_city,
           ac.name AS arrival_city,
           t.seat,
           t.amount,
           t.status,
           u.last_name || ' ' || u.first_name AS operator_name
    FROM tickets t
    LEFT JOIN clients cl ON cl.id = t.client_id
    LEFT JOIN routes r ON r.id = t.route_id
    LEFT JOIN cities dc ON dc.id = r.departure_city_id
    LEFT JOIN cities ac ON ac.id = r.arrival_city_id
    LEFT JOIN users u ON u.id = t.user_id
    WHERE (? = ''
           OR cl.last_name LIKE ? OR cl.first_name LIKE ?
           OR dc.name LIKE ? OR ac.name LIKE ?)
      AND (? = '' OR t.status = ?)
    ORDER BY t.id DESC";

const RECEIPT_SQL: &str = "
    SELECT t.id,
           t.sold_at,
           cl.last_name AS client_last_name,
           cl.first_name AS client_first_name,
           cl.phone AS client_phone,
           dc.name AS departure_city,
           ac.name AS arrival_city,
           r.departure_time,
           r.arrival_time,
           t.seat,
           d.last_name || ' ' || d.first_name AS driver_name,
           v.plate AS vehicle_plate,
           v.vehicle_type,
           t.amount,
           t.status
    FROM tickets t
    LEFT JOIN clients cl ON cl.id = t.client_id
    LEFT JOIN routes r ON r.id = t.route_id
    LEFT JOIN cities dc ON dc.id = r.departure_city_id
    LEFT JOIN cities ac ON ac.id = r.arrival_city_id
    LEFT JOIN drivers d ON d.id = r.driver_id
    LEFT JOIN vehicles v ON v.id = r.vehicle_id
    WHERE t.id = ?";

/// Parses a stored status column.
///
/// # Errors
///
/// Returns `PersistenceError::CorruptValue` for anything but `paid` or `cancelled`.
pub(crate) fn parse_status(status: &str) -> Result<TicketStatus, PersistenceError> {
    status
        .parse::<TicketStatus>()
        .map_err(|e| PersistenceError::CorruptValue(e.to_string()))
}

/// Lists tickets newest first.
///
/// The text filter matches client names and city names; the status filter
/// restricts the list to paid or cancelled tickets.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored status is unknown.
pub fn list_tickets(
    conn: &mut SqliteConnection,
    filter: &str,
    status: StatusFilter,
) -> Result<Vec<TicketRow>, PersistenceError> {
    let (text, pattern) = filter_binds(filter);
    let status_text: &str = status.status().map_or("", |s| s.as_str());

    let rows: Vec<TicketListRow> = diesel::sql_query(LIST_TICKETS_SQL)
        .bind::<Text, _>(&text)
        .bind::<Text, _>(&pattern)
        .bind::<Text, _>(&pattern)
        .bind::<Text, _>(&pattern)
        .bind::<Text, _>(&pattern)
        .bind::<Text, _>(status_text)
        .bind::<Text, _>(status_text)
        .load(conn)?;

    debug!(count = rows.len(), "Listed tickets");
    rows.into_iter()
        .map(|row| {
            Ok(TicketRow {
                id: row.id,
                sold_at: row.sold_at,
                client_name: row.client_name,
                departure_city: row.departure_city,
                arrival_city: row.arrival_city,
                seat: row.seat,
                amount: row.amount,
                status: parse_status(&row.status)?,
                operator_name: row.operator_name,
            })
        })
        .collect()
}

/// Retrieves a ticket by id.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored status is unknown.
/// Returns `Ok(None)` if the ticket is not found.
pub fn get_ticket(
    conn: &mut SqliteConnection,
    ticket_id: i64,
) -> Result<Option<Ticket>, PersistenceError> {
    let record: Option<TicketRecord> = tickets::table
        .find(ticket_id)
        .select(TicketRecord::as_select())
        .first(conn)
        .optional()?;

    record
        .map(|record| {
            Ok(Ticket {
                id: record.id,
                sold_at: record.sold_at,
                seat: record.seat,
                amount: record.amount,
                status: parse_status(&record.status)?,
                route_id: record.route_id,
                client_id: record.client_id,
                user_id: record.user_id,
            })
        })
        .transpose()
}

/// Counts paid tickets holding a seat on a route.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_paid_on_seat(
    conn: &mut SqliteConnection,
    route_id: i64,
    seat: i32,
) -> Result<i64, PersistenceError> {
    Ok(tickets::table
        .filter(tickets::route_id.eq(route_id))
        .filter(tickets::seat.eq(seat))
        .filter(tickets::status.eq(TicketStatus::Paid.as_str()))
        .count()
        .get_result(conn)?)
}

/// Joins everything a receipt prints for one ticket.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored status is unknown.
/// Returns `Ok(None)` if the ticket is not found.
pub fn get_receipt(
    conn: &mut SqliteConnection,
    ticket_id: i64,
) -> Result<Option<ReceiptData>, PersistenceError> {
    let row: Option<ReceiptRow> = diesel::sql_query(RECEIPT_SQL)
        .bind::<BigInt, _>(ticket_id)
        .get_result(conn)
        .optional()?;

    row.map(|row| {
        Ok(ReceiptData {
            ticket_id: row.id,
            sold_at: row.sold_at,
            client_last_name: row.client_last_name,
            client_first_name: row.client_first_name,
            client_phone: row.client_phone,
            departure_city: row.departure_city,
            arrival_city: row.arrival_city,
            departure_time: row.departure_time,
            arrival_time: row.arrival_time,
            seat: row.seat,
            driver_name: row.driver_name,
            vehicle_plate: row.vehicle_plate,
            vehicle_type: row.vehicle_type,
            amount: row.amount,
            status: parse_status(&row.status)?,
        })
    })
    .transpose()
}
