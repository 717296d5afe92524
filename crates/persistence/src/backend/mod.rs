// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-specific code.
//!
//! Connection setup, migrations, PRAGMA statements and `last_insert_rowid()`
//! live here. Entity queries and mutations live in `queries/` and
//! `mutations/` and use Diesel DSL or bound `sql_query` text only.

pub mod sqlite;
