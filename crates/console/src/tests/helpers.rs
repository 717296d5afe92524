// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::collections::VecDeque;

use gesttransport_api::SalesPolicy;
use gesttransport_persistence::Persistence;

use crate::app::App;
use crate::console::Console;
use crate::error::ConsoleError;
use crate::input::Input;

/// Replays canned answers. An empty answer accepts the pre-filled value;
/// running out of answers behaves like closing the terminal.
pub struct ScriptedInput {
    answers: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Input for ScriptedInput {
    fn read_line(&mut self, _prompt: &str, initial: &str) -> Result<String, ConsoleError> {
        let answer: String = self.answers.pop_front().ok_or(ConsoleError::Interrupted)?;
        if answer.is_empty() {
            Ok(initial.to_string())
        } else {
            Ok(answer)
        }
    }
}

pub fn create_test_console(answers: &[&str]) -> Console<ScriptedInput, Vec<u8>> {
    Console::new(ScriptedInput::new(answers), Vec::new())
}

/// Runs a whole scripted session against a fresh in-memory database.
pub fn run_test_session(answers: &[&str]) -> (Persistence, String) {
    run_test_session_with_policy(answers, SalesPolicy::default())
}

pub fn run_test_session_with_policy(answers: &[&str], policy: SalesPolicy) -> (Persistence, String) {
    let persistence: Persistence = Persistence::new_in_memory().unwrap();
    let mut app: App<ScriptedInput, Vec<u8>> =
        App::new(persistence, policy, create_test_console(answers));
    app.run().unwrap();
    let (persistence, console) = app.into_parts();
    let output: String = String::from_utf8(console.into_output()).unwrap();
    (persistence, output)
}
