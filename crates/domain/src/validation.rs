// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::ops::RangeInclusive;

use crate::error::DomainError;
use crate::schedule::CalendarDate;

/// Seat numbers and vehicle seat counts accepted by the forms.
pub const SEAT_RANGE: RangeInclusive<i32> = 1..=200;

/// Whether a form creates a new row or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// All fields start blank (or at their defaults).
    Create,
    /// Fields are pre-filled from the row with this id.
    Edit(i64),
}

impl FormMode {
    /// Returns the edited row id, if any.
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(*id),
        }
    }
}

/// Form-level validation.
///
/// Implementations trim every text field and check required fields. The
/// returned value is the normalized draft that is handed to persistence.
pub trait Validate: Sized {
    /// Validates and normalizes the draft.
    ///
    /// # Errors
    ///
    /// Returns the first `DomainError` found; no database call is made.
    fn validated(&self, mode: FormMode) -> Result<Self, DomainError>;
}

/// Returns the trimmed value of a required field.
///
/// # Errors
///
/// Returns `DomainError::MissingField` if the value is blank after trimming.
pub fn required(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

/// Returns the id of a required selector.
///
/// # Errors
///
/// Returns `DomainError::MissingField` if nothing is selected.
pub const fn required_choice(field: &'static str, id: Option<i64>) -> Result<i64, DomainError> {
    match id {
        Some(id) => Ok(id),
        None => Err(DomainError::MissingField { field }),
    }
}

/// Trims an optional text field.
#[must_use]
pub fn optional(value: &str) -> String {
    value.trim().to_string()
}

/// Maps a blank optional field to `None`.
///
/// Optional columns store `NULL` rather than an empty string so that unique
/// optional columns (such as driver badges) do not collide on blanks.
#[must_use]
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Validates an optional `YYYY-MM-DD` field, returning its canonical form.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if a non-blank value does not parse.
pub fn optional_date(field: &'static str, value: &str) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        return Ok(String::new());
    }
    CalendarDate::parse(field, value).map(|date| date.to_storage())
}

/// Validates a seat number or seat count.
///
/// # Errors
///
/// Returns `DomainError::InvalidSeat` if the value is outside `SEAT_RANGE`.
pub fn validate_seat(seat: i32) -> Result<i32, DomainError> {
    if SEAT_RANGE.contains(&seat) {
        Ok(seat)
    } else {
        Err(DomainError::InvalidSeat { seat })
    }
}

/// Validates a monetary amount.
///
/// # Errors
///
/// Returns `DomainError::InvalidAmount` if the amount is negative, NaN or infinite.
pub fn validate_amount(field: &'static str, amount: f64) -> Result<f64, DomainError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(DomainError::InvalidAmount { field })
    }
}
