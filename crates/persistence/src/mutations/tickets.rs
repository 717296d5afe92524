// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gesttransport_domain::TicketStatus;
use tracing::info;

use super::require_affected;
use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::tickets;
use crate::error::PersistenceError;

/// Values of a new ticket row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket<'a> {
    pub route_id: i64,
    pub client_id: i64,
    pub seat: i32,
    pub amount: f64,
    /// The selling operator.
    pub user_id: i64,
    /// `YYYY-MM-DD HH:MM`.
    pub sold_at: &'a str,
}

/// Inserts a paid ticket and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_ticket(
    conn: &mut SqliteConnection,
    ticket: &NewTicket<'_>,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(tickets::table)
        .values((
            tickets::sold_at.eq(ticket.sold_at),
            tickets::seat.eq(ticket.seat),
            tickets::amount.eq(ticket.amount),
            tickets::status.eq(TicketStatus::Paid.as_str()),
            tickets::route_id.eq(ticket.route_id),
            tickets::client_id.eq(ticket.client_id),
            tickets::user_id.eq(Some(ticket.user_id)),
        ))
        .execute(conn)?;

    let ticket_id: i64 = get_last_insert_rowid(conn)?;
    info!(
        ticket_id,
        route_id = ticket.route_id,
        seat = ticket.seat,
        user_id = ticket.user_id,
        "Sold ticket"
    );
    Ok(ticket_id)
}

/// Sets a ticket's status to `cancelled`. No other column changes.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no ticket has this id.
pub fn cancel_ticket(conn: &mut SqliteConnection, ticket_id: i64) -> Result<(), PersistenceError> {
    let affected: usize = diesel::update(tickets::table.find(ticket_id))
        .set(tickets::status.eq(TicketStatus::Cancelled.as_str()))
        .execute(conn)?;

    require_affected(affected, "ticket", ticket_id)?;
    info!(ticket_id, "Cancelled ticket");
    Ok(())
}
