// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gesttransport_api::ApiError;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Errors that end a prompt, a form or the whole program.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The operator pressed Ctrl-C or closed the input.
    #[error("Input closed")]
    Interrupted,

    #[error("Terminal error: {0}")]
    Readline(#[from] ReadlineError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}
