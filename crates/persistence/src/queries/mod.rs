// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! Single-table lookups and joins Diesel can express use the DSL. List views
//! that join the same table twice (departure and arrival cities) or
//! aggregate use `sql_query` with bound parameters.

pub mod clients;
pub mod companies;
pub mod fleet;
pub mod overview;
pub mod routes;
pub mod tickets;
pub mod users;

/// Bind values for a list filter.
///
/// The first value is the trimmed filter text and the second its `LIKE`
/// pattern. Raw list queries test `? = ''` against the first so that an
/// empty filter also returns rows whose filtered columns are `NULL`.
pub(crate) fn filter_binds(filter: &str) -> (String, String) {
    let trimmed: &str = filter.trim();
    (trimmed.to_string(), format!("%{trimmed}%"))
}

/// Returns the `LIKE` pattern for a non-blank filter.
pub(crate) fn like_pattern(filter: &str) -> Option<String> {
    let trimmed: &str = filter.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("%{trimmed}%"))
    }
}
