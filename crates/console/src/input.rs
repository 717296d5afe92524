// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Line input.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::error::ConsoleError;

/// A source of operator input, one line at a time.
pub trait Input {
    /// Reads a line. `initial` is pre-filled for editing; accepting it
    /// unchanged returns it.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Interrupted` when the operator cancels or the
    /// input is closed.
    fn read_line(&mut self, prompt: &str, initial: &str) -> Result<String, ConsoleError>;

    /// Records a command line in the history.
    fn remember(&mut self, _line: &str) {}
}

/// Interactive terminal input with line editing and command history.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    /// Opens the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up.
    pub fn new() -> Result<Self, ConsoleError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Input for Terminal {
    fn read_line(&mut self, prompt: &str, initial: &str) -> Result<String, ConsoleError> {
        let line: Result<String, ReadlineError> = if initial.is_empty() {
            self.editor.readline(prompt)
        } else {
            self.editor.readline_with_initial(prompt, (initial, ""))
        };
        match line {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Err(ConsoleError::Interrupted),
            Err(err) => Err(err.into()),
        }
    }

    fn remember(&mut self, line: &str) {
        if !line.trim().is_empty() {
            let _ = self.editor.add_history_entry(line);
        }
    }
}
