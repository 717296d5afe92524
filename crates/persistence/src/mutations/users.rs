// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gesttransport_domain::{UserDraft, non_blank};
use tracing::info;

use super::require_affected;
use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::users;
use crate::error::PersistenceError;
use crate::password::hash_password;

/// Inserts an operator account and returns its id.
///
/// The clear-text password in the draft is digested before storage.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the login is taken.
pub fn create_user(conn: &mut SqliteConnection, draft: &UserDraft) -> Result<i64, PersistenceError> {
    diesel::insert_into(users::table)
        .values((
            users::last_name.eq(draft.last_name.trim()),
            users::first_name.eq(draft.first_name.trim()),
            users::phone.eq(non_blank(&draft.phone)),
            users::birth_date.eq(non_blank(&draft.birth_date)),
            users::gender.eq(draft.gender.as_str()),
            users::login.eq(draft.login.trim()),
            users::password_hash.eq(hash_password(&draft.password)),
            users::role_id.eq(draft.role_id),
            users::company_id.eq(draft.company_id),
        ))
        .execute(conn)?;

    let user_id: i64 = get_last_insert_rowid(conn)?;
    info!(user_id, login = %draft.login.trim(), "Created user");
    Ok(user_id)
}

/// Updates an operator account.
///
/// The stored digest is replaced only when the draft carries a new password.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the login is taken and
/// `PersistenceError::NotFound` if no account has this id.
pub fn update_user(
    conn: &mut SqliteConnection,
    user_id: i64,
    draft: &UserDraft,
) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        let affected: usize = diesel::update(users::table.find(user_id))
            .set((
                users::last_name.eq(draft.last_name.trim()),
                users::first_name.eq(draft.first_name.trim()),
                users::phone.eq(non_blank(&draft.phone)),
                users::birth_date.eq(non_blank(&draft.birth_date)),
                users::gender.eq(draft.gender.as_str()),
                users::login.eq(draft.login.trim()),
                users::role_id.eq(draft.role_id),
                users::company_id.eq(draft.company_id),
            ))
            .execute(conn)?;
        require_affected(affected, "user", user_id)?;

        if let Some(password) = draft.new_password() {
            diesel::update(users::table.find(user_id))
                .set(users::password_hash.eq(hash_password(password)))
                .execute(conn)?;
            info!(user_id, "Replaced user password");
        }
        Ok(())
    })?;

    info!(user_id, "Updated user");
    Ok(())
}

/// Deletes an operator account. Tickets they sold keep the stale reference.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no account has this id.
pub fn delete_user(conn: &mut SqliteConnection, user_id: i64) -> Result<(), PersistenceError> {
    let affected: usize = diesel::delete(users::table.find(user_id)).execute(conn)?;
    require_affected(affected, "user", user_id)?;
    info!(user_id, "Deleted user");
    Ok(())
}
