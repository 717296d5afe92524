// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::display::full_name;
use crate::entity::Entity;
use crate::error::DomainError;
use crate::validation::{FormMode, Validate, optional, required};

/// A passenger buying tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub phone: Option<String>,
}

impl Client {
    /// Returns `last first`.
    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(&self.last_name, &self.first_name)
    }
}

/// A client with the number of tickets sold to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRow {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub phone: Option<String>,
    /// Counts every ticket, cancelled ones included.
    pub ticket_count: i64,
}

/// Form fields for a client. Also used by the quick-add sub-form of a sale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDraft {
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
}

impl ClientDraft {
    /// Creates a client draft.
    #[must_use]
    pub fn new(last_name: &str, first_name: &str, phone: &str) -> Self {
        Self {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            phone: phone.to_string(),
        }
    }
}

impl Validate for ClientDraft {
    fn validated(&self, _mode: FormMode) -> Result<Self, DomainError> {
        Ok(Self {
            last_name: required("last_name", &self.last_name)?,
            first_name: required("first_name", &self.first_name)?,
            phone: optional(&self.phone),
        })
    }
}

impl Entity for Client {
    const LABEL: &'static str = "client";
    type Row = ClientRow;
    type Draft = ClientDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> ClientDraft {
        ClientDraft {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            phone: self.phone.clone().unwrap_or_default(),
        }
    }
}
