// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed-format timestamps and calendar dates.
//!
//! Route schedules and ticket sale times are stored as text with minute
//! precision (`YYYY-MM-DD HH:MM`). Birth and hire dates are stored as
//! `YYYY-MM-DD`. Both formats sort lexicographically in chronological order,
//! which the "upcoming routes" and "latest departure first" queries rely on.

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

use crate::error::DomainError;

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A scheduled instant with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScheduleTime(PrimitiveDateTime);

impl ScheduleTime {
    /// Parses a `YYYY-MM-DD HH:MM` string.
    ///
    /// # Arguments
    ///
    /// * `field` - The form field name, reported on failure
    /// * `value` - The text to parse (surrounding whitespace is ignored)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` if the value is blank and
    /// `DomainError::InvalidTimestamp` if it does not match the format.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::MissingField { field });
        }
        PrimitiveDateTime::parse(trimmed, TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::InvalidTimestamp {
                field,
                value: trimmed.to_string(),
            })
    }

    /// Returns the current local time truncated to the minute.
    ///
    /// Falls back to UTC when the local offset cannot be determined.
    #[must_use]
    pub fn now() -> Self {
        let now: OffsetDateTime =
            OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let minute: Time = Time::from_hms(now.hour(), now.minute(), 0).unwrap_or(Time::MIDNIGHT);
        Self(PrimitiveDateTime::new(now.date(), minute))
    }

    /// Creates a schedule time from its date and time parts.
    #[must_use]
    pub const fn new(date: Date, time: Time) -> Self {
        Self(PrimitiveDateTime::new(date, time))
    }

    /// Returns the stored text form (`YYYY-MM-DD HH:MM`).
    #[must_use]
    pub fn to_storage(&self) -> String {
        self.0
            .format(TIMESTAMP_FORMAT)
            .unwrap_or_else(|_| self.0.to_string())
    }
}

impl std::fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_storage())
    }
}

/// A calendar date without time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate(Date);

impl CalendarDate {
    /// Parses a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` if the value is blank and
    /// `DomainError::InvalidDate` if it does not match the format.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::MissingField { field });
        }
        Date::parse(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::InvalidDate {
                field,
                value: trimmed.to_string(),
            })
    }

    /// Returns the stored text form (`YYYY-MM-DD`).
    #[must_use]
    pub fn to_storage(&self) -> String {
        self.0
            .format(DATE_FORMAT)
            .unwrap_or_else(|_| self.0.to_string())
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_storage())
    }
}
