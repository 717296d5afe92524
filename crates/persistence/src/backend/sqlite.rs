// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite connection setup and helpers without a Diesel DSL equivalent.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(QueryableByName)]
struct PragmaRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Returns the id assigned by the most recent insert on this connection.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}

/// Reports whether `SQLite` currently enforces foreign keys.
///
/// The agency database keeps enforcement off: deleting a company, driver,
/// vehicle, city or route leaves rows that reference it untouched.
///
/// # Errors
///
/// Returns an error if the PRAGMA query fails.
pub fn foreign_key_enforcement_enabled(
    conn: &mut SqliteConnection,
) -> Result<bool, PersistenceError> {
    let row: PragmaRow = diesel::sql_query("PRAGMA foreign_keys").get_result::<PragmaRow>(conn)?;
    Ok(row.foreign_keys != 0)
}

/// Runs pending migrations on the provided connection.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub fn run_migrations(
    conn: &mut SqliteConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Running SQLite database migrations");
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    debug!(count = applied.len(), "Migrations applied");
    Ok(())
}

/// Opens a `SQLite` database at the given URL and brings its schema up to date.
///
/// The file is created if it does not exist.
///
/// # Arguments
///
/// * `database_url` - A file path or a `file:` URI
///
/// # Errors
///
/// Returns an error if the connection, the PRAGMA or a migration fails.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!("Initializing SQLite database at: {}", database_url);

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    // Dangling references are part of the data model.
    diesel::sql_query("PRAGMA foreign_keys = OFF")
        .execute(&mut conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;

    run_migrations(&mut conn).map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(conn)
}
