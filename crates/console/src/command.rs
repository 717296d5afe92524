// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use gesttransport_api::ModuleKey;
use gesttransport_domain::StatusFilter;

pub const HELP: &str = "\
Navigation:
  overview | tickets | routes | clients | drivers | vehicles | companies | users
  go <module>            switch to a module
  logout                 return to the login prompt
  quit                   exit
In a module:
  list                   reload the list
  search [text]          filter the list (blank clears the filter)
  new                    open a create form (sell a ticket in tickets)
  edit <id>              open an edit form
  delete <id>            delete a row
In tickets:
  cancel <id>            cancel a ticket
  receipt <id> [html]    show a receipt
  status all|paid|cancelled";

/// A shell command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(ModuleKey),
    List,
    Search(String),
    New,
    Edit(i64),
    Delete(i64),
    Cancel(i64),
    Receipt { ticket_id: i64, html: bool },
    Status(StatusFilter),
    Help,
    Logout,
    Quit,
}

fn parse_id(verb: &str, rest: &str) -> Result<i64, String> {
    rest.split_whitespace()
        .next()
        .ok_or_else(|| format!("Usage: {verb} <id>"))?
        .parse::<i64>()
        .map_err(|_| format!("Expected a numeric id, got '{rest}'"))
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line: &str = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let verb: String = verb.to_lowercase();
        let rest: &str = rest.trim();

        if let Ok(key) = verb.parse::<ModuleKey>() {
            return Ok(Self::Go(key));
        }
        match verb.as_str() {
            "go" => rest.parse::<ModuleKey>().map(Self::Go),
            "list" | "refresh" => Ok(Self::List),
            "search" => Ok(Self::Search(rest.to_string())),
            "new" | "add" | "sell" => Ok(Self::New),
            "edit" => parse_id("edit", rest).map(Self::Edit),
            "delete" => parse_id("delete", rest).map(Self::Delete),
            "cancel" => parse_id("cancel", rest).map(Self::Cancel),
            "receipt" => Ok(Self::Receipt {
                ticket_id: parse_id("receipt", rest)?,
                html: rest
                    .split_whitespace()
                    .nth(1)
                    .is_some_and(|format| format.eq_ignore_ascii_case("html")),
            }),
            "status" => rest
                .parse::<StatusFilter>()
                .map(Self::Status)
                .map_err(|err| err.to_string()),
            "help" | "?" => Ok(Self::Help),
            "logout" => Ok(Self::Logout),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("Unknown command '{other}'. Type help.")),
        }
    }
}
