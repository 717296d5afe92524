// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use gesttransport_domain::DomainError;
use gesttransport_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// contract the front end renders. A failed save leaves the form with the
/// caller, so every variant can be shown and the operation retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A form field is missing or malformed. No database call was made.
    Validation {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The database rejected the operation.
    Persistence {
        /// The raw database message.
        message: String,
    },
    /// The login and password did not match an account.
    ///
    /// Unknown logins and wrong passwords are not distinguished.
    AuthenticationFailed,
    /// A requested row does not exist.
    NotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The operation is not allowed for the current operator.
    Forbidden {
        /// A human-readable description of the refusal.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { message, .. } | Self::Forbidden { message } => {
                write!(f, "{message}")
            }
            Self::Persistence { message } => write!(f, "Database error: {message}"),
            Self::AuthenticationFailed => write!(f, "Incorrect login or password."),
            Self::NotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns whether this error was raised before touching the database.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub(crate) fn not_found(resource_type: &str, id: i64) -> Self {
        Self::NotFound {
            resource_type: resource_type.to_string(),
            message: format!("no {resource_type} with id {id}"),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::SelfDeletion => ApiError::Forbidden {
            message: err.to_string(),
        },
        DomainError::MissingField { .. }
        | DomainError::InvalidTimestamp { .. }
        | DomainError::InvalidDate { .. }
        | DomainError::InvalidSeat { .. }
        | DomainError::InvalidAmount { .. }
        | DomainError::InvalidTicketStatus(_)
        | DomainError::InvalidGender(_)
        | DomainError::SeatAlreadySold { .. } => ApiError::Validation {
            field: err.field().to_string(),
            message: err.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// The database message is preserved verbatim.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::NotFound {
            resource_type: String::from("Record"),
            message,
        },
        PersistenceError::UniqueViolation(message)
        | PersistenceError::ForeignKeyViolation(message) => ApiError::Persistence { message },
        other => ApiError::Persistence {
            message: other.to_string(),
        },
    }
}
