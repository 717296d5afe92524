// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The navigation shell: one active module at a time over resident state.

use std::str::FromStr;

use gesttransport_domain::{Client, Company, Driver, User, Vehicle};
use gesttransport_persistence::Persistence;
use tracing::info;

use crate::auth::Session;
use crate::crud::CrudModule;
use crate::error::ApiError;
use crate::overview::Overview;
use crate::routes::RouteCatalog;
use crate::tickets::{SalesPolicy, TicketDesk};

/// The modules reachable from the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModuleKey {
    #[default]
    Overview,
    Tickets,
    Routes,
    Clients,
    Drivers,
    Vehicles,
    Companies,
    Users,
}

impl ModuleKey {
    /// Every module, in navigation order.
    pub const ALL: [Self; 8] = [
        Self::Overview,
        Self::Tickets,
        Self::Routes,
        Self::Clients,
        Self::Drivers,
        Self::Vehicles,
        Self::Companies,
        Self::Users,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Tickets => "tickets",
            Self::Routes => "routes",
            Self::Clients => "clients",
            Self::Drivers => "drivers",
            Self::Vehicles => "vehicles",
            Self::Companies => "companies",
            Self::Users => "users",
        }
    }
}

impl FromStr for ModuleKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| format!("Unknown module: {}", s.trim()))
    }
}

impl std::fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated session with every module constructed and resident.
///
/// Module state (filters and loaded rows) survives switching. Only the
/// overview is recomputed when it becomes active again.
#[derive(Debug, Clone)]
pub struct Shell {
    session: Session,
    active: ModuleKey,
    overview: Overview,
    pub companies: CrudModule<Company>,
    pub vehicles: CrudModule<Vehicle>,
    pub drivers: CrudModule<Driver>,
    pub clients: CrudModule<Client>,
    pub users: CrudModule<User>,
    pub routes: RouteCatalog,
    pub tickets: TicketDesk,
}

impl Shell {
    /// Builds every module and loads its initial rows.
    ///
    /// # Errors
    ///
    /// Returns an error if any initial query fails.
    pub fn start(
        persistence: &mut Persistence,
        session: Session,
        policy: SalesPolicy,
    ) -> Result<Self, ApiError> {
        let overview: Overview = Overview::load(persistence, &session)?;
        let mut shell: Self = Self {
            session,
            active: ModuleKey::Overview,
            overview,
            companies: CrudModule::new(),
            vehicles: CrudModule::new(),
            drivers: CrudModule::new(),
            clients: CrudModule::new(),
            users: CrudModule::new(),
            routes: RouteCatalog::new(),
            tickets: TicketDesk::new(policy),
        };
        shell.companies.refresh(persistence)?;
        shell.vehicles.refresh(persistence)?;
        shell.drivers.refresh(persistence)?;
        shell.clients.refresh(persistence)?;
        shell.users.refresh(persistence)?;
        shell.routes.refresh(persistence)?;
        shell.tickets.refresh(persistence)?;
        Ok(shell)
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn active(&self) -> ModuleKey {
        self.active
    }

    /// The overview as last computed.
    #[must_use]
    pub const fn overview(&self) -> &Overview {
        &self.overview
    }

    /// Makes `key` the active module. Switching to the overview recomputes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the overview queries fail.
    pub fn switch_to(
        &mut self,
        persistence: &mut Persistence,
        key: ModuleKey,
    ) -> Result<(), ApiError> {
        if key == ModuleKey::Overview {
            self.overview = Overview::load(persistence, &self.session)?;
        }
        self.active = key;
        Ok(())
    }

    /// Ends the session. The shell and all module state are dropped.
    pub fn logout(self) {
        info!(
            user_id = self.session.user_id,
            login = %self.session.login,
            "Operator logged out"
        );
    }
}
