// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::DomainError;
use crate::validation::{FormMode, Validate, optional, required};

/// An organization owning vehicles, drivers and user accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Database id.
    pub id: i64,
    /// Company name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
}

/// Form fields for a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDraft {
    pub name: String,
    pub description: String,
    pub phone: String,
    pub address: String,
}

impl Validate for CompanyDraft {
    fn validated(&self, _mode: FormMode) -> Result<Self, DomainError> {
        Ok(Self {
            name: required("name", &self.name)?,
            description: optional(&self.description),
            phone: optional(&self.phone),
            address: optional(&self.address),
        })
    }
}

impl Entity for Company {
    const LABEL: &'static str = "company";
    type Row = Self;
    type Draft = CompanyDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> CompanyDraft {
        CompanyDraft {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            address: self.address.clone().unwrap_or_default(),
        }
    }
}
