// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable, Text};
use gesttransport_domain::{Choice, Client, ClientRow, full_name, or_placeholder};
use tracing::debug;

use super::filter_binds;
use crate::diesel_schema::clients;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = clients)]
struct ClientRecord {
    id: i64,
    last_name: String,
    first_name: String,
    phone: Option<String>,
}

impl From<ClientRecord> for Client {
    fn from(record: ClientRecord) -> Self {
        Self {
            id: record.id,
            last_name: record.last_name,
            first_name: record.first_name,
            phone: record.phone,
        }
    }
}

#[derive(QueryableByName)]
struct ClientListRow {
    #[diesel(sql_type = BigInt)]
    id: i64,
    #[diesel(sql_type = Text)]
    last_name: String,
    #[diesel(sql_type = Text)]
    first_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    phone: Option<String>,
    #[diesel(sql_type = BigInt)]
    ticket_count: i64,
}

const LIST_CLIENTS_SQL: &str = "
    SELECT c.id, c.last_name, c.first_name, c.phone, COUNT(t.id) AS ticket_count
    FROM clients c
    LEFT JOIN tickets t ON t.client_id = c.id
    WHERE (? = '' OR c.last_name LIKE ? OR c.first_name LIKE ? OR c.phone LIKE ?)
    GROUP BY c.id, c.last_name, c.first_name, c.phone
    ORDER BY c.last_name, c.first_name, c.id";

/// Lists clients by last name with the number of tickets sold to each.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_clients(
    conn: &mut SqliteConnection,
    filter: &str,
) -> Result<Vec<ClientRow>, PersistenceError> {
    let (text, pattern) = filter_binds(filter);

    let rows: Vec<ClientListRow> = diesel::sql_query(LIST_CLIENTS_SQL)
        .bind::<Text, _>(&text)
        .bind::<Text, _>(&pattern)
        .bind::<Text, _>(&pattern)
        .bind::<Text, _>(&pattern)
        .load(conn)?;

    debug!(count = rows.len(), "Listed clients");
    Ok(rows
        .into_iter()
        .map(|row| ClientRow {
            id: row.id,
            last_name: row.last_name,
            first_name: row.first_name,
            phone: row.phone,
            ticket_count: row.ticket_count,
        })
        .collect())
}

/// Retrieves a client by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the client is not found.
pub fn get_client(
    conn: &mut SqliteConnection,
    client_id: i64,
) -> Result<Option<Client>, PersistenceError> {
    let record: Option<ClientRecord> = clients::table
        .find(client_id)
        .select(ClientRecord::as_select())
        .first(conn)
        .optional()?;
    Ok(record.map(Client::from))
}

/// Client selector entries, labelled `Last First (phone)`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn client_choices(conn: &mut SqliteConnection) -> Result<Vec<Choice>, PersistenceError> {
    let records: Vec<ClientRecord> = clients::table
        .select(ClientRecord::as_select())
        .order((clients::last_name.asc(), clients::first_name.asc()))
        .load(conn)?;
    Ok(records
        .into_iter()
        .map(|record| {
            let label: String = format!(
                "{} ({})",
                full_name(&record.last_name, &record.first_name),
                or_placeholder(record.phone.as_deref())
            );
            Choice::new(record.id, label)
        })
        .collect())
}
