// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence gateway for the GestTransport agency manager.
//!
//! A single `SQLite` file holds every table. Opening it runs the embedded
//! Diesel migrations and seeds the reference data (roles, a default
//! company and the administrator account) when the tables are empty.
//!
//! ## Referential integrity
//!
//! Foreign keys are declared in the schema but not enforced. Deleting a
//! company, driver, vehicle, city, client or route leaves the rows that
//! point at it in place; list queries use `LEFT JOIN` and report the
//! missing side as `None`.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` gives every caller a private shared-cache
//! in-memory database, so tests never observe each other's rows.

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

use diesel::SqliteConnection;
use diesel::prelude::*;
use gesttransport_domain::{
    Choice, City, Client, ClientDraft, ClientRow, Company, CompanyDraft, Driver, DriverDraft,
    DriverRow, OverviewStats, ReceiptData, RecentTicket, Role, Route, RouteDraft, RouteRow,
    StatusFilter, Ticket, TicketRow, UpcomingRoute, User, UserDraft, UserRow, Vehicle,
    VehicleDraft, VehicleRow,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod password;
mod queries;
mod seed;

#[cfg(test)]
mod tests;

pub use data_models::{SeedReport, UserProfile};
pub use error::PersistenceError;
pub use mutations::tickets::NewTicket;
pub use password::hash_password;
pub use seed::{DEFAULT_ADMIN_LOGIN, DEFAULT_ADMIN_PASSWORD};

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Handle on the agency database.
///
/// Owns one connection for its whole lifetime; dropping the handle closes
/// it on every exit path.
pub struct Persistence {
    conn: SqliteConnection,
    seed_report: SeedReport,
}

impl Persistence {
    /// Creates a persistence handle over a private in-memory database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:memdb_gesttransport_{db_id}?mode=memory&cache=shared");
        Self::open(&shared_memory_url)
    }

    /// Creates a persistence handle over a database file.
    ///
    /// The file, its schema and the seed data are created if absent.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;
        Self::open(path_str)
    }

    fn open(database_url: &str) -> Result<Self, PersistenceError> {
        let mut conn: SqliteConnection = backend::sqlite::initialize_database(database_url)?;
        let seed_report: SeedReport =
            conn.transaction::<SeedReport, PersistenceError, _>(seed::seed_defaults)?;
        info!(?seed_report, "Database ready");
        Ok(Self { conn, seed_report })
    }

    /// Reports which reference rows were inserted when this handle opened.
    #[must_use]
    pub const fn seed_report(&self) -> SeedReport {
        self.seed_report
    }

    /// Reports whether `SQLite` enforces foreign keys on this connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the PRAGMA query fails.
    pub fn foreign_key_enforcement_enabled(&mut self) -> Result<bool, PersistenceError> {
        backend::sqlite::foreign_key_enforcement_enabled(&mut self.conn)
    }

    // ========================================================================
    // Authentication & Accounts
    // ========================================================================

    /// Returns the account matching a login and clear-text password.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn find_user_by_credentials(
        &mut self,
        login: &str,
        password: &str,
    ) -> Result<Option<UserProfile>, PersistenceError> {
        queries::users::find_user_by_credentials(&mut self.conn, login, password)
    }

    /// Lists operator accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_users(&mut self, filter: &str) -> Result<Vec<UserRow>, PersistenceError> {
        queries::users::list_users(&mut self.conn, filter)
    }

    /// Retrieves an operator account.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_user(&mut self, user_id: i64) -> Result<Option<User>, PersistenceError> {
        queries::users::get_user(&mut self.conn, user_id)
    }

    /// Retrieves the stored password digest of an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_password_hash(&mut self, user_id: i64) -> Result<Option<String>, PersistenceError> {
        queries::users::get_password_hash(&mut self.conn, user_id)
    }

    /// Creates an operator account.
    ///
    /// # Errors
    ///
    /// Returns an error if the login is taken or the insert fails.
    pub fn create_user(&mut self, draft: &UserDraft) -> Result<i64, PersistenceError> {
        mutations::users::create_user(&mut self.conn, draft)
    }

    /// Updates an operator account.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is missing, the login is taken or the
    /// update fails.
    pub fn update_user(&mut self, user_id: i64, draft: &UserDraft) -> Result<(), PersistenceError> {
        mutations::users::update_user(&mut self.conn, user_id, draft)
    }

    /// Deletes an operator account.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is missing or the delete fails.
    pub fn delete_user(&mut self, user_id: i64) -> Result<(), PersistenceError> {
        mutations::users::delete_user(&mut self.conn, user_id)
    }

    /// Lists roles.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_roles(&mut self) -> Result<Vec<Role>, PersistenceError> {
        queries::users::list_roles(&mut self.conn)
    }

    /// Role selector entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn role_choices(&mut self) -> Result<Vec<Choice>, PersistenceError> {
        queries::users::role_choices(&mut self.conn)
    }

    // ========================================================================
    // Companies
    // ========================================================================

    /// Lists companies.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_companies(&mut self, filter: &str) -> Result<Vec<Company>, PersistenceError> {
        queries::companies::list_companies(&mut self.conn, filter)
    }

    /// Retrieves a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_company(&mut self, company_id: i64) -> Result<Option<Company>, PersistenceError> {
        queries::companies::get_company(&mut self.conn, company_id)
    }

    /// Creates a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_company(&mut self, draft: &CompanyDraft) -> Result<i64, PersistenceError> {
        mutations::companies::create_company(&mut self.conn, draft)
    }

    /// Updates a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the company is missing or the update fails.
    pub fn update_company(
        &mut self,
        company_id: i64,
        draft: &CompanyDraft,
    ) -> Result<(), PersistenceError> {
        mutations::companies::update_company(&mut self.conn, company_id, draft)
    }

    /// Deletes a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the company is missing or the delete fails.
    pub fn delete_company(&mut self, company_id: i64) -> Result<(), PersistenceError> {
        mutations::companies::delete_company(&mut self.conn, company_id)
    }

    /// Company selector entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn company_choices(&mut self) -> Result<Vec<Choice>, PersistenceError> {
        queries::companies::company_choices(&mut self.conn)
    }

    // ========================================================================
    // Fleet
    // ========================================================================

    /// Lists vehicles.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_vehicles(&mut self, filter: &str) -> Result<Vec<VehicleRow>, PersistenceError> {
        queries::fleet::list_vehicles(&mut self.conn, filter)
    }

    /// Retrieves a vehicle.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_vehicle(&mut self, vehicle_id: i64) -> Result<Option<Vehicle>, PersistenceError> {
        queries::fleet::get_vehicle(&mut self.conn, vehicle_id)
    }

    /// Creates a vehicle.
    ///
    /// # Errors
    ///
    /// Returns an error if the plate is taken or the insert fails.
    pub fn create_vehicle(&mut self, draft: &VehicleDraft) -> Result<i64, PersistenceError> {
        mutations::fleet::create_vehicle(&mut self.conn, draft)
    }

    /// Updates a vehicle.
    ///
    /// # Errors
    ///
    /// Returns an error if the vehicle is missing, the plate is taken or the
    /// update fails.
    pub fn update_vehicle(
        &mut self,
        vehicle_id: i64,
        draft: &VehicleDraft,
    ) -> Result<(), PersistenceError> {
        mutations::fleet::update_vehicle(&mut self.conn, vehicle_id, draft)
    }

    /// Deletes a vehicle.
    ///
    /// # Errors
    ///
    /// Returns an error if the vehicle is missing or the delete fails.
    pub fn delete_vehicle(&mut self, vehicle_id: i64) -> Result<(), PersistenceError> {
        mutations::fleet::delete_vehicle(&mut self.conn, vehicle_id)
    }

    /// Vehicle selector entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn vehicle_choices(&mut self) -> Result<Vec<Choice>, PersistenceError> {
        queries::fleet::vehicle_choices(&mut self.conn)
    }

    /// Lists drivers.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_drivers(&mut self, filter: &str) -> Result<Vec<DriverRow>, PersistenceError> {
        queries::fleet::list_drivers(&mut self.conn, filter)
    }

    /// Retrieves a driver.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_driver(&mut self, driver_id: i64) -> Result<Option<Driver>, PersistenceError> {
        queries::fleet::get_driver(&mut self.conn, driver_id)
    }

    /// Creates a driver.
    ///
    /// # Errors
    ///
    /// Returns an error if the badge is taken or the insert fails.
    pub fn create_driver(&mut self, draft: &DriverDraft) -> Result<i64, PersistenceError> {
        mutations::fleet::create_driver(&mut self.conn, draft)
    }

    /// Updates a driver.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is missing, the badge is taken or the
    /// update fails.
    pub fn update_driver(
        &mut self,
        driver_id: i64,
        draft: &DriverDraft,
    ) -> Result<(), PersistenceError> {
        mutations::fleet::update_driver(&mut self.conn, driver_id, draft)
    }

    /// Deletes a driver.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is missing or the delete fails.
    pub fn delete_driver(&mut self, driver_id: i64) -> Result<(), PersistenceError> {
        mutations::fleet::delete_driver(&mut self.conn, driver_id)
    }

    /// Driver selector entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn driver_choices(&mut self) -> Result<Vec<Choice>, PersistenceError> {
        queries::fleet::driver_choices(&mut self.conn)
    }

    // ========================================================================
    // Clients
    // ========================================================================

    /// Lists clients with their ticket counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_clients(&mut self, filter: &str) -> Result<Vec<ClientRow>, PersistenceError> {
        queries::clients::list_clients(&mut self.conn, filter)
    }

    /// Retrieves a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_client(&mut self, client_id: i64) -> Result<Option<Client>, PersistenceError> {
        queries::clients::get_client(&mut self.conn, client_id)
    }

    /// Creates a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_client(&mut self, draft: &ClientDraft) -> Result<i64, PersistenceError> {
        mutations::clients::create_client(&mut self.conn, draft)
    }

    /// Updates a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the client is missing or the update fails.
    pub fn update_client(
        &mut self,
        client_id: i64,
        draft: &ClientDraft,
    ) -> Result<(), PersistenceError> {
        mutations::clients::update_client(&mut self.conn, client_id, draft)
    }

    /// Deletes a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the client is missing or the delete fails.
    pub fn delete_client(&mut self, client_id: i64) -> Result<(), PersistenceError> {
        mutations::clients::delete_client(&mut self.conn, client_id)
    }

    /// Client selector entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn client_choices(&mut self) -> Result<Vec<Choice>, PersistenceError> {
        queries::clients::client_choices(&mut self.conn)
    }

    // ========================================================================
    // Cities & Routes
    // ========================================================================

    /// Lists cities sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_cities(&mut self) -> Result<Vec<City>, PersistenceError> {
        queries::routes::list_cities(&mut self.conn)
    }

    /// Finds a city by exact name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn find_city_by_name(&mut self, name: &str) -> Result<Option<City>, PersistenceError> {
        queries::routes::find_city_by_name(&mut self.conn, name)
    }

    /// Creates a city.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is taken or the insert fails.
    pub fn create_city(&mut self, name: &str) -> Result<i64, PersistenceError> {
        mutations::routes::create_city(&mut self.conn, name)
    }

    /// City selector entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn city_choices(&mut self) -> Result<Vec<Choice>, PersistenceError> {
        queries::routes::city_choices(&mut self.conn)
    }

    /// Lists routes newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_routes(&mut self, filter: &str) -> Result<Vec<RouteRow>, PersistenceError> {
        queries::routes::list_routes(&mut self.conn, filter)
    }

    /// Retrieves a route.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_route(&mut self, route_id: i64) -> Result<Option<Route>, PersistenceError> {
        queries::routes::get_route(&mut self.conn, route_id)
    }

    /// Creates a route.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_route(&mut self, draft: &RouteDraft) -> Result<i64, PersistenceError> {
        mutations::routes::create_route(&mut self.conn, draft)
    }

    /// Updates a route.
    ///
    /// # Errors
    ///
    /// Returns an error if the route is missing or the update fails.
    pub fn update_route(
        &mut self,
        route_id: i64,
        draft: &RouteDraft,
    ) -> Result<(), PersistenceError> {
        mutations::routes::update_route(&mut self.conn, route_id, draft)
    }

    /// Deletes a route.
    ///
    /// # Errors
    ///
    /// Returns an error if the route is missing or the delete fails.
    pub fn delete_route(&mut self, route_id: i64) -> Result<(), PersistenceError> {
        mutations::routes::delete_route(&mut self.conn, route_id)
    }

    /// Route selector entries for the sale form.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn route_choices(&mut self) -> Result<Vec<Choice>, PersistenceError> {
        queries::routes::route_choices(&mut self.conn)
    }

    // ========================================================================
    // Tickets
    // ========================================================================

    /// Lists tickets newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_tickets(
        &mut self,
        filter: &str,
        status: StatusFilter,
    ) -> Result<Vec<TicketRow>, PersistenceError> {
        queries::tickets::list_tickets(&mut self.conn, filter, status)
    }

    /// Retrieves a ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_ticket(&mut self, ticket_id: i64) -> Result<Option<Ticket>, PersistenceError> {
        queries::tickets::get_ticket(&mut self.conn, ticket_id)
    }

    /// Inserts a paid ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_ticket(&mut self, ticket: &NewTicket<'_>) -> Result<i64, PersistenceError> {
        mutations::tickets::create_ticket(&mut self.conn, ticket)
    }

    /// Marks a ticket cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket is missing or the update fails.
    pub fn cancel_ticket(&mut self, ticket_id: i64) -> Result<(), PersistenceError> {
        mutations::tickets::cancel_ticket(&mut self.conn, ticket_id)
    }

    /// Counts paid tickets holding `seat` on a route.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_paid_on_seat(&mut self, route_id: i64, seat: i32) -> Result<i64, PersistenceError> {
        queries::tickets::count_paid_on_seat(&mut self.conn, route_id, seat)
    }

    /// Joins the data printed on a ticket receipt.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_receipt(&mut self, ticket_id: i64) -> Result<Option<ReceiptData>, PersistenceError> {
        queries::tickets::get_receipt(&mut self.conn, ticket_id)
    }

    // ========================================================================
    // Overview
    // ========================================================================

    /// Computes the overview statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if a count or sum fails.
    pub fn overview_stats(&mut self) -> Result<OverviewStats, PersistenceError> {
        queries::overview::overview_stats(&mut self.conn)
    }

    /// Returns the `limit` most recent tickets.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn recent_tickets(&mut self, limit: i64) -> Result<Vec<RecentTicket>, PersistenceError> {
        queries::overview::recent_tickets(&mut self.conn, limit)
    }

    /// Returns up to `limit` routes departing at or after `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn upcoming_routes(
        &mut self,
        now: &str,
        limit: i64,
    ) -> Result<Vec<UpcomingRoute>, PersistenceError> {
        queries::overview::upcoming_routes(&mut self.conn, now, limit)
    }
}
