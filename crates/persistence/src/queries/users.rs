// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operator account and role queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gesttransport_domain::{Choice, Gender, Role, User, UserRow};
use tracing::debug;

use super::like_pattern;
use crate::data_models::UserProfile;
use crate::diesel_schema::{companies, roles, users};
use crate::error::PersistenceError;
use crate::password::hash_password;

#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
struct UserRecord {
    id: i64,
    last_name: String,
    first_name: String,
    phone: Option<String>,
    birth_date: Option<String>,
    gender: String,
    login: String,
    role_id: Option<i64>,
    company_id: Option<i64>,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = roles)]
struct RoleRecord {
    id: i64,
    name: String,
    description: Option<String>,
}

type UserListTuple = (
    i64,
    String,
    String,
    String,
    Option<String>,
    String,
    Option<String>,
);

type ProfileTuple = (i64, String, String, String, Option<String>, Option<String>);

fn parse_gender(code: &str) -> Result<Gender, PersistenceError> {
    code.parse::<Gender>()
        .map_err(|e| PersistenceError::CorruptValue(e.to_string()))
}

/// Lists operator accounts with their role name.
///
/// Filters on last name, first name and login.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored gender is unknown.
pub fn list_users(
    conn: &mut SqliteConnection,
    filter: &str,
) -> Result<Vec<UserRow>, PersistenceError> {
    let mut query = users::table
        .left_join(roles::table)
        .select((
            users::id,
            users::last_name,
            users::first_name,
            users::login,
            users::phone,
            users::gender,
            roles::name.nullable(),
        ))
        .order(users::id.asc())
        .into_boxed();

    if let Some(pattern) = like_pattern(filter) {
        query = query.filter(
            users::last_name
                .like(pattern.clone())
                .or(users::first_name.like(pattern.clone()))
                .or(users::login.like(pattern)),
        );
    }

    let rows: Vec<UserListTuple> = query.load(conn)?;
    debug!(count = rows.len(), "Listed users");
    rows.into_iter()
        .map(
            |(id, last_name, first_name, login, phone, gender, role_name)| {
                Ok(UserRow {
                    id,
                    last_name,
                    first_name,
                    login,
                    phone,
                    gender: parse_gender(&gender)?,
                    role_name,
                })
            },
        )
        .collect()
}

/// Retrieves an operator account by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account is not found.
pub fn get_user(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<User>, PersistenceError> {
    let record: Option<UserRecord> = users::table
        .find(user_id)
        .select(UserRecord::as_select())
        .first(conn)
        .optional()?;

    record
        .map(|record| {
            Ok(User {
                id: record.id,
                last_name: record.last_name,
                first_name: record.first_name,
                phone: record.phone,
                birth_date: record.birth_date,
                gender: parse_gender(&record.gender)?,
                login: record.login,
                role_id: record.role_id,
                company_id: record.company_id,
            })
        })
        .transpose()
}

/// Looks up the account matching a login and clear-text password.
///
/// The password is digested and compared with the stored digest in the
/// query itself. Unknown logins and wrong passwords both yield `Ok(None)`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_user_by_credentials(
    conn: &mut SqliteConnection,
    login: &str,
    password: &str,
) -> Result<Option<UserProfile>, PersistenceError> {
    debug!("Looking up user by login: {}", login);

    let row: Option<ProfileTuple> = users::table
        .left_join(roles::table)
        .left_join(companies::table)
        .filter(users::login.eq(login))
        .filter(users::password_hash.eq(hash_password(password)))
        .select((
            users::id,
            users::login,
            users::last_name,
            users::first_name,
            roles::name.nullable(),
            companies::name.nullable(),
        ))
        .first(conn)
        .optional()?;

    Ok(row.map(
        |(user_id, login, last_name, first_name, role_name, company_name)| UserProfile {
            user_id,
            login,
            last_name,
            first_name,
            role_name,
            company_name,
        },
    ))
}

/// Retrieves the stored password digest of an account.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account is not found.
pub fn get_password_hash(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<String>, PersistenceError> {
    Ok(users::table
        .find(user_id)
        .select(users::password_hash)
        .first(conn)
        .optional()?)
}

/// Lists all roles in id order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_roles(conn: &mut SqliteConnection) -> Result<Vec<Role>, PersistenceError> {
    let records: Vec<RoleRecord> = roles::table
        .select(RoleRecord::as_select())
        .order(roles::id.asc())
        .load(conn)?;
    Ok(records
        .into_iter()
        .map(|record| Role {
            id: record.id,
            name: record.name,
            description: record.description,
        })
        .collect())
}

/// Role selector entries.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn role_choices(conn: &mut SqliteConnection) -> Result<Vec<Choice>, PersistenceError> {
    Ok(list_roles(conn)?
        .into_iter()
        .map(|role| Choice::new(role.id, role.name))
        .collect())
}
