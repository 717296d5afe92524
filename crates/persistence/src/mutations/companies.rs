// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gesttransport_domain::{CompanyDraft, non_blank};
use tracing::info;

use super::require_affected;
use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::companies;
use crate::error::PersistenceError;

/// Inserts a company and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_company(
    conn: &mut SqliteConnection,
    draft: &CompanyDraft,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(companies::table)
        .values((
            companies::name.eq(draft.name.trim()),
            companies::description.eq(non_blank(&draft.description)),
            companies::phone.eq(non_blank(&draft.phone)),
            companies::address.eq(non_blank(&draft.address)),
        ))
        .execute(conn)?;

    let company_id: i64 = get_last_insert_rowid(conn)?;
    info!(company_id, "Created company");
    Ok(company_id)
}

/// Replaces every field of a company.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no company has this id.
pub fn update_company(
    conn: &mut SqliteConnection,
    company_id: i64,
    draft: &CompanyDraft,
) -> Result<(), PersistenceError> {
    let affected: usize = diesel::update(companies::table.find(company_id))
        .set((
            companies::name.eq(draft.name.trim()),
            companies::description.eq(non_blank(&draft.description)),
            companies::phone.eq(non_blank(&draft.phone)),
            companies::address.eq(non_blank(&draft.address)),
        ))
        .execute(conn)?;

    require_affected(affected, "company", company_id)?;
    info!(company_id, "Updated company");
    Ok(())
}

/// Deletes a company. Vehicles, drivers and users keep the stale reference.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no company has this id.
pub fn delete_company(conn: &mut SqliteConnection, company_id: i64) -> Result<(), PersistenceError> {
    let affected: usize = diesel::delete(companies::table.find(company_id)).execute(conn)?;
    require_affected(affected, "company", company_id)?;
    info!(company_id, "Deleted company");
    Ok(())
}
