// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gesttransport_domain::{Choice, Company};
use tracing::debug;

use super::like_pattern;
use crate::diesel_schema::companies;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = companies)]
struct CompanyRecord {
    id: i64,
    name: String,
    description: Option<String>,
    phone: Option<String>,
    address: Option<String>,
}

impl From<CompanyRecord> for Company {
    fn from(record: CompanyRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            phone: record.phone,
            address: record.address,
        }
    }
}

/// Lists companies in insertion order, filtered on name, phone and address.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_companies(
    conn: &mut SqliteConnection,
    filter: &str,
) -> Result<Vec<Company>, PersistenceError> {
    let mut query = companies::table
        .select(CompanyRecord::as_select())
        .order(companies::id.asc())
        .into_boxed();

    if let Some(pattern) = like_pattern(filter) {
        query = query.filter(
            companies::name
                .like(pattern.clone())
                .or(companies::phone.like(pattern.clone()))
                .or(companies::address.like(pattern)),
        );
    }

    let records: Vec<CompanyRecord> = query.load(conn)?;
    debug!(count = records.len(), "Listed companies");
    Ok(records.into_iter().map(Company::from).collect())
}

/// Retrieves a company by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the company is not found.
pub fn get_company(
    conn: &mut SqliteConnection,
    company_id: i64,
) -> Result<Option<Company>, PersistenceError> {
    let result: Result<CompanyRecord, diesel::result::Error> = companies::table
        .find(company_id)
        .select(CompanyRecord::as_select())
        .first(conn);

    match result {
        Ok(record) => Ok(Some(Company::from(record))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Company selector entries, sorted by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn company_choices(conn: &mut SqliteConnection) -> Result<Vec<Choice>, PersistenceError> {
    let rows: Vec<(i64, String)> = companies::table
        .select((companies::id, companies::name))
        .order((companies::name.asc(), companies::id.asc()))
        .load(conn)?;
    Ok(rows
        .into_iter()
        .map(|(id, name)| Choice::new(id, name))
        .collect())
}
