// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inserts, updates and deletes.
//!
//! Every logical save is a single statement except account edits that also
//! replace the password, which run in one transaction. Deletes never cascade.

pub mod clients;
pub mod companies;
pub mod fleet;
pub mod routes;
pub mod tickets;
pub mod users;

use crate::error::PersistenceError;

/// Maps an update or delete that touched no row to `NotFound`.
pub(crate) fn require_affected(
    affected: usize,
    entity: &str,
    id: i64,
) -> Result<(), PersistenceError> {
    if affected == 0 {
        return Err(PersistenceError::NotFound(format!("{entity} {id}")));
    }
    Ok(())
}
