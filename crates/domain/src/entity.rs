// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::validation::Validate;

/// A record managed through the uniform list / form / delete workflow.
///
/// The same generic module drives companies, vehicles, drivers, clients,
/// users and routes; each entity only describes its list row and its form.
pub trait Entity: Clone + Debug {
    /// Human-readable name used in log lines and prompts.
    const LABEL: &'static str;

    /// The joined projection shown in the entity's list.
    type Row: Clone + Debug;

    /// The editable form fields.
    type Draft: Validate + Clone + Default + Debug;

    /// Returns the database id.
    fn id(&self) -> i64;

    /// Pre-fills an edit form from the stored record.
    fn to_draft(&self) -> Self::Draft;

    /// Checks whether the operator may delete the row with `id`.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` when the deletion is refused.
    fn check_delete(id: i64, operator_id: i64) -> Result<(), DomainError> {
        let _ = (id, operator_id);
        Ok(())
    }
}

/// One entry of a selector (combo box) in a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// The referenced row id.
    pub id: i64,
    /// The text shown to the operator.
    pub label: String,
}

impl Choice {
    /// Creates a selector entry.
    #[must_use]
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}
