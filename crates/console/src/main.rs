// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod app;
mod command;
mod console;
mod error;
mod forms;
mod input;
mod render;

#[cfg(test)]
mod tests;

use std::io::Stdout;
use std::path::PathBuf;

use clap::Parser;
use gesttransport_api::SalesPolicy;
use gesttransport_persistence::{Persistence, SeedReport};
use tracing::info;

use crate::app::App;
use crate::console::Console;
use crate::input::Terminal;

/// GestTransport - transport agency manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. Created and seeded if absent.
    #[arg(short, long, default_value = "gestransport.db")]
    database: PathBuf,

    /// Use a private in-memory database instead of the file.
    #[arg(long)]
    in_memory: bool,

    /// Refuse to sell a seat already held by a paid ticket on the same route.
    #[arg(long)]
    forbid_double_booking: bool,
}

impl Args {
    const fn sales_policy(&self) -> SalesPolicy {
        SalesPolicy {
            allow_double_booking: !self.forbid_double_booking,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    // Logs go to stderr so they do not interleave with tables on stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let persistence: Persistence = if args.in_memory {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    } else {
        info!("Using database file at: {}", args.database.display());
        Persistence::new_with_file(&args.database)?
    };
    let seeded: SeedReport = persistence.seed_report();
    if seeded.admin {
        info!("Created the default administrator account");
    }

    let console: Console<Terminal, Stdout> = Console::new(Terminal::new()?, std::io::stdout());
    let mut app: App<Terminal, Stdout> = App::new(persistence, args.sales_policy(), console);
    app.run()?;

    info!("Goodbye");
    Ok(())
}
