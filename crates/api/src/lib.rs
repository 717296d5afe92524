// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workflow boundary for the agency manager.
//!
//! Front ends drive the application exclusively through this crate. Each
//! workflow takes the persistence handle and, where the acting operator
//! matters, the `Session` explicitly; nothing is read from global state.
//!
//! - `CrudModule` is the single list/search/form/delete state machine shared
//!   by companies, vehicles, drivers, clients and users.
//! - `RouteCatalog` adds inline city creation to the route form.
//! - `TicketDesk` sells seats, cancels tickets and renders receipts.
//! - `Shell` keeps every module resident and tracks the active one.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod crud;
mod error;
mod overview;
mod receipt;
mod repository;
mod routes;
mod shell;
mod tickets;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticationService, Session};
pub use crud::{Confirmation, CrudModule, Decision, Form};
pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use overview::{Overview, RECENT_TICKET_LIMIT, UPCOMING_ROUTE_LIMIT};
pub use receipt::{RECEIPT_FOOTER, Receipt};
pub use repository::Repository;
pub use routes::{CitySlot, NONE_LABEL, RouteCatalog, RouteForm, RouteFormOptions, with_none};
pub use shell::{ModuleKey, Shell};
pub use tickets::{SaleForm, SalesPolicy, TicketDesk};
