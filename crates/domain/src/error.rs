// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
///
/// Every variant is raised before any database call is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required form field is empty after trimming whitespace.
    MissingField {
        /// The field that was left blank.
        field: &'static str,
    },
    /// A timestamp field does not match `YYYY-MM-DD HH:MM`.
    InvalidTimestamp {
        /// The offending field.
        field: &'static str,
        /// The value that failed to parse.
        value: String,
    },
    /// A calendar date field does not match `YYYY-MM-DD`.
    InvalidDate {
        /// The offending field.
        field: &'static str,
        /// The value that failed to parse.
        value: String,
    },
    /// A seat number or seat count is out of range.
    InvalidSeat {
        /// The rejected seat value.
        seat: i32,
    },
    /// A monetary amount is negative or not finite.
    InvalidAmount {
        /// The offending field.
        field: &'static str,
    },
    /// A ticket status string is not recognized.
    InvalidTicketStatus(String),
    /// A gender code is not recognized.
    InvalidGender(String),
    /// The authenticated operator attempted to delete their own account.
    SelfDeletion,
    /// The seat is already held by a paid ticket on the same route.
    SeatAlreadySold {
        /// The route the seat belongs to.
        route_id: i64,
        /// The seat number.
        seat: i32,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "{field} is required"),
            Self::InvalidTimestamp { field, value } => {
                write!(f, "{field} must be formatted YYYY-MM-DD HH:MM, got '{value}'")
            }
            Self::InvalidDate { field, value } => {
                write!(f, "{field} must be formatted YYYY-MM-DD, got '{value}'")
            }
            Self::InvalidSeat { seat } => {
                write!(f, "Seat {seat} is out of range")
            }
            Self::InvalidAmount { field } => {
                write!(f, "{field} must be a non-negative amount")
            }
            Self::InvalidTicketStatus(status) => write!(f, "Unknown ticket status: {status}"),
            Self::InvalidGender(gender) => write!(f, "Unknown gender: {gender}"),
            Self::SelfDeletion => write!(f, "You cannot delete your own account"),
            Self::SeatAlreadySold { route_id, seat } => {
                write!(f, "Seat {seat} is already sold on route {route_id}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

impl DomainError {
    /// Returns the form field this error refers to, when there is one.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field }
            | Self::InvalidTimestamp { field, .. }
            | Self::InvalidDate { field, .. }
            | Self::InvalidAmount { field } => field,
            Self::InvalidSeat { .. } | Self::SeatAlreadySold { .. } => "seat",
            Self::InvalidTicketStatus(_) => "status",
            Self::InvalidGender(_) => "gender",
            Self::SelfDeletion => "id",
        }
    }
}
