// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! First-run reference data.
//!
//! Each group is only inserted when its table is empty, so opening an
//! existing database never duplicates or overwrites rows.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::SeedReport;
use crate::diesel_schema::{companies, roles, users};
use crate::error::PersistenceError;
use crate::password::hash_password;

/// Login of the seeded administrator account.
pub const DEFAULT_ADMIN_LOGIN: &str = "admin";

/// Password of the seeded administrator account.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

const DEFAULT_ROLES: [(&str, &str); 2] = [
    ("Admin", "Administrateur système"),
    ("Agent", "Agent de vente"),
];

const DEFAULT_COMPANY: (&str, &str) = ("Ma Société", "Société principale");

/// Inserts the default roles, company and administrator where missing.
///
/// # Errors
///
/// Returns an error if a count or insert fails.
pub fn seed_defaults(conn: &mut SqliteConnection) -> Result<SeedReport, PersistenceError> {
    let mut report: SeedReport = SeedReport::default();

    let role_count: i64 = roles::table.count().get_result(conn)?;
    if role_count == 0 {
        for (name, description) in DEFAULT_ROLES {
            diesel::insert_into(roles::table)
                .values((roles::name.eq(name), roles::description.eq(description)))
                .execute(conn)?;
        }
        report.roles = true;
        info!("Seeded default roles");
    }

    let company_count: i64 = companies::table.count().get_result(conn)?;
    if company_count == 0 {
        diesel::insert_into(companies::table)
            .values((
                companies::name.eq(DEFAULT_COMPANY.0),
                companies::description.eq(DEFAULT_COMPANY.1),
            ))
            .execute(conn)?;
        report.company = true;
        info!("Seeded default company");
    }

    let user_count: i64 = users::table.count().get_result(conn)?;
    if user_count == 0 {
        let role_id: Option<i64> = roles::table
            .filter(roles::name.eq(DEFAULT_ROLES[0].0))
            .select(roles::id)
            .first(conn)
            .optional()?;
        let company_id: Option<i64> = companies::table
            .order(companies::id.asc())
            .select(companies::id)
            .first(conn)
            .optional()?;

        diesel::insert_into(users::table)
            .values((
                users::last_name.eq("Admin"),
                users::first_name.eq("Super"),
                users::gender.eq("M"),
                users::login.eq(DEFAULT_ADMIN_LOGIN),
                users::password_hash.eq(hash_password(DEFAULT_ADMIN_PASSWORD)),
                users::role_id.eq(role_id),
                users::company_id.eq(company_id),
            ))
            .execute(conn)?;
        let user_id: i64 = get_last_insert_rowid(conn)?;
        report.admin = true;
        info!(user_id, "Seeded administrator account");
    }

    Ok(report)
}
