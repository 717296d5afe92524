// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operator accounts and their roles.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::display::full_name;
use crate::entity::Entity;
use crate::error::DomainError;
use crate::validation::{FormMode, Validate, optional, optional_date, required};

/// Gender recorded on an operator account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Returns the stored single-letter code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" | "m" => Ok(Self::Male),
            "F" | "f" => Ok(Self::Female),
            other => Err(DomainError::InvalidGender(other.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static reference data describing what an operator is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// An operator account. The password digest never leaves persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub phone: Option<String>,
    /// `YYYY-MM-DD`.
    pub birth_date: Option<String>,
    pub gender: Gender,
    pub login: String,
    pub role_id: Option<i64>,
    pub company_id: Option<i64>,
}

impl User {
    /// Returns `last first`.
    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(&self.last_name, &self.first_name)
    }
}

/// An operator as shown in the user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub login: String,
    pub phone: Option<String>,
    pub gender: Gender,
    pub role_name: Option<String>,
}

/// Form fields for an operator account.
///
/// `password` holds the clear-text password typed in the form. It is
/// required when creating an account; when editing, leaving it blank keeps
/// the stored digest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
    pub birth_date: String,
    pub gender: Gender,
    pub login: String,
    pub password: String,
    pub role_id: Option<i64>,
    pub company_id: Option<i64>,
}

impl UserDraft {
    /// Returns the new password, or `None` when the stored one is kept.
    #[must_use]
    pub fn new_password(&self) -> Option<&str> {
        if self.password.trim().is_empty() {
            None
        } else {
            Some(&self.password)
        }
    }
}

impl Validate for UserDraft {
    fn validated(&self, mode: FormMode) -> Result<Self, DomainError> {
        let last_name: String = required("last_name", &self.last_name)?;
        let first_name: String = required("first_name", &self.first_name)?;
        let login: String = required("login", &self.login)?;
        if mode == FormMode::Create && self.password.trim().is_empty() {
            return Err(DomainError::MissingField { field: "password" });
        }
        Ok(Self {
            last_name,
            first_name,
            phone: optional(&self.phone),
            birth_date: optional_date("birth_date", &self.birth_date)?,
            gender: self.gender,
            login,
            password: self.password.clone(),
            role_id: self.role_id,
            company_id: self.company_id,
        })
    }
}

impl Entity for User {
    const LABEL: &'static str = "user";
    type Row = UserRow;
    type Draft = UserDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> UserDraft {
        UserDraft {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            phone: self.phone.clone().unwrap_or_default(),
            birth_date: self.birth_date.clone().unwrap_or_default(),
            gender: self.gender,
            login: self.login.clone(),
            password: String::new(),
            role_id: self.role_id,
            company_id: self.company_id,
        }
    }

    fn check_delete(id: i64, operator_id: i64) -> Result<(), DomainError> {
        if id == operator_id {
            return Err(DomainError::SelfDeletion);
        }
        Ok(())
    }
}
