// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Prompts, selectors and messages on top of an `Input` and an output stream.

use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;

use gesttransport_api::Confirmation;

use crate::error::ConsoleError;
use crate::input::Input;

/// What the operator picked in a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick {
    /// An existing entry, or `None` for the empty entry.
    Entry(Option<i64>),
    /// A new entry typed as `+Name`.
    New(String),
}

pub struct Console<I, W> {
    input: I,
    out: W,
}

impl<I: Input, W: Write> Console<I, W> {
    pub const fn new(input: I, out: W) -> Self {
        Self { input, out }
    }

    pub const fn out(&mut self) -> &mut W {
        &mut self.out
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn say(&mut self, text: &(impl Display + ?Sized)) -> Result<(), ConsoleError> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Prints a warning. The raw error text is shown as is.
    pub fn warn(&mut self, message: &(impl Display + ?Sized)) -> Result<(), ConsoleError> {
        writeln!(self.out, "Warning: {message}")?;
        Ok(())
    }

    pub fn read_command(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        let line: String = self.input.read_line(prompt, "")?;
        self.input.remember(&line);
        Ok(line)
    }

    /// Asks for a text field, pre-filled with its current value.
    pub fn ask(&mut self, label: &str, current: &str) -> Result<String, ConsoleError> {
        self.input.read_line(&format!("{label}: "), current)
    }

    /// Asks until the answer parses as `T`.
    pub fn ask_parsed<T>(&mut self, label: &str, current: &T) -> Result<T, ConsoleError>
    where
        T: FromStr + Display,
    {
        loop {
            let answer: String = self.ask(label, &current.to_string())?;
            match answer.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => self.warn(&format!("'{}' is not a valid {label}", answer.trim()))?,
            }
        }
    }

    /// Shows numbered entries and asks for one.
    ///
    /// The current entry is pre-filled; a blank answer keeps it. When
    /// `allow_new` is set, `+Name` asks for a new entry named `Name`.
    pub fn ask_choice(
        &mut self,
        label: &str,
        entries: &[(Option<i64>, String)],
        current: Option<i64>,
        allow_new: bool,
    ) -> Result<Pick, ConsoleError> {
        writeln!(self.out, "{label}:")?;
        let mut selected: Option<usize> = None;
        for (index, (id, text)) in entries.iter().enumerate() {
            let marker: &str = if *id == current && (current.is_some() || index == 0) {
                selected = Some(index + 1);
                "*"
            } else {
                " "
            };
            writeln!(self.out, " {marker}{:>3}) {text}", index + 1)?;
        }
        if allow_new {
            writeln!(self.out, "      (type +Name to add a new entry)")?;
        }

        let initial: String = selected.map(|n| n.to_string()).unwrap_or_default();
        loop {
            let answer: String = self.input.read_line(&format!("{label} #: "), &initial)?;
            let answer: &str = answer.trim();
            if answer.is_empty() {
                return Ok(Pick::Entry(current));
            }
            if allow_new && let Some(name) = answer.strip_prefix('+') {
                return Ok(Pick::New(name.trim().to_string()));
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=entries.len()).contains(&n) => {
                    return Ok(Pick::Entry(entries[n - 1].0));
                }
                _ => self.warn(&format!("Pick a number between 1 and {}", entries.len()))?,
            }
        }
    }
}

impl<I: Input, W: Write> Confirmation for Console<I, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.input
            .read_line(&format!("{prompt} [y/N] "), "")
            .is_ok_and(|answer| {
                matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
            })
    }
}
