// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gesttransport_domain::{ClientDraft, non_blank};
use tracing::info;

use super::require_affected;
use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::clients;
use crate::error::PersistenceError;

/// Inserts a client and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_client(
    conn: &mut SqliteConnection,
    draft: &ClientDraft,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(clients::table)
        .values((
            clients::last_name.eq(draft.last_name.trim()),
            clients::first_name.eq(draft.first_name.trim()),
            clients::phone.eq(non_blank(&draft.phone)),
        ))
        .execute(conn)?;

    let client_id: i64 = get_last_insert_rowid(conn)?;
    info!(client_id, "Created client");
    Ok(client_id)
}

/// Replaces every field of a client.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no client has this id.
pub fn update_client(
    conn: &mut SqliteConnection,
    client_id: i64,
    draft: &ClientDraft,
) -> Result<(), PersistenceError> {
    let affected: usize = diesel::update(clients::table.find(client_id))
        .set((
            clients::last_name.eq(draft.last_name.trim()),
            clients::first_name.eq(draft.first_name.trim()),
            clients::phone.eq(non_blank(&draft.phone)),
        ))
        .execute(conn)?;

    require_affected(affected, "client", client_id)?;
    info!(client_id, "Updated client");
    Ok(())
}

/// Deletes a client. Their tickets keep the stale reference.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no client has this id.
pub fn delete_client(conn: &mut SqliteConnection, client_id: i64) -> Result<(), PersistenceError> {
    let affected: usize = diesel::delete(clients::table.find(client_id)).execute(conn)?;
    require_affected(affected, "client", client_id)?;
    info!(client_id, "Deleted client");
    Ok(())
}
