// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The generic list/search/form/delete workflow shared by the entity modules.

use gesttransport_domain::{Entity, FormMode, Validate};
use tracing::{debug, info};

use crate::auth::Session;
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::repository::Repository;

/// Asks the operator to confirm a destructive action.
pub trait Confirmation {
    /// Returns `true` when the operator accepts.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Result of an action guarded by a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The operator accepted and the action was applied.
    Confirmed,
    /// The operator declined; nothing changed.
    Cancelled,
}

/// An open create or edit form.
///
/// The form stays with the caller when saving fails, so the operator can fix
/// the offending field and retry.
#[derive(Debug, Clone)]
pub struct Form<E: Entity> {
    mode: FormMode,
    /// The editable fields.
    pub draft: E::Draft,
}

impl<E: Entity> Form<E> {
    /// Opens a blank create form.
    #[must_use]
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: E::Draft::default(),
        }
    }

    /// Opens an edit form pre-filled from `record`.
    #[must_use]
    pub fn edit(record: &E) -> Self {
        Self {
            mode: FormMode::Edit(record.id()),
            draft: record.to_draft(),
        }
    }

    /// Returns whether this form creates or edits.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }
}

/// List state for one entity: the current filter and the rows it matched.
#[derive(Debug, Clone)]
pub struct CrudModule<E: Entity> {
    filter: String,
    rows: Vec<E::Row>,
}

impl<E: Entity> Default for CrudModule<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> CrudModule<E> {
    /// Creates an empty module. Call `refresh` to load rows.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filter: String::new(),
            rows: Vec::new(),
        }
    }

    /// Returns the current filter text.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Returns the rows loaded by the last refresh.
    #[must_use]
    pub fn rows(&self) -> &[E::Row] {
        &self.rows
    }

    /// Reloads the rows with the current filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn refresh<R: Repository<E>>(&mut self, repo: &mut R) -> Result<&[E::Row], ApiError> {
        self.rows = repo
            .list(&self.filter)
            .map_err(translate_persistence_error)?;
        debug!(
            entity = E::LABEL,
            filter = %self.filter,
            rows = self.rows.len(),
            "Refreshed list"
        );
        Ok(&self.rows)
    }

    /// Replaces the filter and reloads the rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn search<R: Repository<E>>(
        &mut self,
        repo: &mut R,
        filter: &str,
    ) -> Result<&[E::Row], ApiError> {
        self.filter = filter.to_string();
        self.refresh(repo)
    }

    /// Opens a form: blank when `id` is `None`, pre-filled otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if `id` names a missing row.
    pub fn open_form<R: Repository<E>>(
        repo: &mut R,
        id: Option<i64>,
    ) -> Result<Form<E>, ApiError> {
        let Some(id) = id else {
            return Ok(Form::create());
        };
        let record: E = repo
            .find(id)
            .map_err(translate_persistence_error)?
            .ok_or_else(|| ApiError::not_found(E::LABEL, id))?;
        Ok(Form::edit(&record))
    }

    /// Validates and saves a form, then reloads the list.
    ///
    /// # Returns
    ///
    /// The id of the created or updated row.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` before any database call if a field is
    /// invalid, or `ApiError::Persistence` with the database message if the
    /// write is rejected. The list is left untouched on failure.
    pub fn save<R: Repository<E>>(&mut self, repo: &mut R, form: &Form<E>) -> Result<i64, ApiError> {
        let draft: E::Draft = form
            .draft
            .validated(form.mode)
            .map_err(translate_domain_error)?;

        let id: i64 = match form.mode {
            FormMode::Create => repo.insert(&draft).map_err(translate_persistence_error)?,
            FormMode::Edit(id) => {
                repo.update(id, &draft)
                    .map_err(translate_persistence_error)?;
                id
            }
        };

        info!(entity = E::LABEL, id, mode = ?form.mode, "Saved record");
        self.refresh(repo)?;
        Ok(id)
    }

    /// Deletes a row after confirmation, then reloads the list.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Forbidden` if the deletion is refused for this
    /// operator (checked before prompting), or `ApiError::Persistence` if
    /// the delete fails.
    pub fn delete<R: Repository<E>, C: Confirmation>(
        &mut self,
        repo: &mut R,
        id: i64,
        session: &Session,
        confirmation: &mut C,
    ) -> Result<Decision, ApiError> {
        E::check_delete(id, session.user_id).map_err(translate_domain_error)?;

        let prompt: String = format!("Delete this {}?", E::LABEL);
        if !confirmation.confirm(&prompt) {
            return Ok(Decision::Cancelled);
        }

        repo.delete(id).map_err(translate_persistence_error)?;
        info!(entity = E::LABEL, id, operator = session.user_id, "Deleted record");
        self.refresh(repo)?;
        Ok(Decision::Confirmed)
    }
}
