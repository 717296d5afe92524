// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sha2::{Digest, Sha256};

/// Returns the stored digest of a password: lowercase hex SHA-256, unsalted.
///
/// Databases created by earlier releases hold digests in this exact form,
/// so the function must stay byte-compatible.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
