// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operator authentication.

use gesttransport_domain::full_name;
use gesttransport_persistence::{Persistence, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ApiError, translate_persistence_error};

/// The authenticated operator.
///
/// A session is handed explicitly to every workflow that needs to know who
/// is acting: the ticket desk records it as the seller and the user module
/// uses it to refuse self-deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The operator's user id.
    pub user_id: i64,
    /// The login used to open the session.
    pub login: String,
    /// The operator's last name.
    pub last_name: String,
    /// The operator's first name.
    pub first_name: String,
    /// The operator's role name, if the role still exists.
    pub role: Option<String>,
    /// The operator's company name, if any.
    pub company: Option<String>,
}

impl Session {
    /// Returns `last first`, as shown in the shell header.
    #[must_use]
    pub fn display_name(&self) -> String {
        full_name(&self.last_name, &self.first_name)
    }

    /// Returns `first last`, as used in the overview greeting.
    #[must_use]
    pub fn greeting_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<UserProfile> for Session {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.user_id,
            login: profile.login,
            last_name: profile.last_name,
            first_name: profile.first_name,
            role: profile.role_name,
            company: profile.company_name,
        }
    }
}

/// Authentication service.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Looks up the account matching a login and password.
    ///
    /// The password is hashed and compared against the stored digest inside
    /// the query; nothing is trimmed.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `login` - The login as typed
    /// * `password` - The clear-text password as typed
    ///
    /// # Returns
    ///
    /// The session for the matching account, or `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn authenticate(
        persistence: &mut Persistence,
        login: &str,
        password: &str,
    ) -> Result<Option<Session>, ApiError> {
        let profile: Option<UserProfile> = persistence
            .find_user_by_credentials(login, password)
            .map_err(translate_persistence_error)?;
        Ok(profile.map(Session::from))
    }

    /// Authenticates an operator, failing with a generic error on mismatch.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AuthenticationFailed` for an unknown login or a
    /// wrong password, and `ApiError::Persistence` if the query fails.
    pub fn login(
        persistence: &mut Persistence,
        login: &str,
        password: &str,
    ) -> Result<Session, ApiError> {
        let session: Session = Self::authenticate(persistence, login, password)?
            .ok_or_else(|| {
                warn!(login, "Rejected login attempt");
                ApiError::AuthenticationFailed
            })?;

        info!(
            user_id = session.user_id,
            login = %session.login,
            role = ?session.role,
            "Operator logged in"
        );
        Ok(session)
    }
}
