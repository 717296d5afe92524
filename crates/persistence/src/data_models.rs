// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// An authenticated operator joined with their role and company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    pub login: String,
    pub last_name: String,
    pub first_name: String,
    pub role_name: Option<String>,
    pub company_name: Option<String>,
}

/// Outcome of first-run seeding. Each flag is set when the row was inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub roles: bool,
    pub company: bool,
    pub admin: bool,
}
