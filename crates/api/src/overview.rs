// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The overview (home) module.

use gesttransport_domain::{OverviewStats, RecentTicket, ScheduleTime, UpcomingRoute};
use gesttransport_persistence::Persistence;
use tracing::debug;

use crate::auth::Session;
use crate::error::{ApiError, translate_persistence_error};

/// Number of recent tickets shown on the overview.
pub const RECENT_TICKET_LIMIT: i64 = 10;

/// Number of upcoming departures shown on the overview.
pub const UPCOMING_ROUTE_LIMIT: i64 = 5;

/// Statistics and short lists computed from the current database state.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub greeting: String,
    pub stats: OverviewStats,
    pub recent_tickets: Vec<RecentTicket>,
    pub upcoming_routes: Vec<UpcomingRoute>,
}

impl Overview {
    /// Recomputes everything from the database.
    ///
    /// Upcoming routes are those departing at or after the current local
    /// time, soonest first.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn load(persistence: &mut Persistence, session: &Session) -> Result<Self, ApiError> {
        let now: String = ScheduleTime::now().to_storage();
        let stats: OverviewStats = persistence
            .overview_stats()
            .map_err(translate_persistence_error)?;
        let recent_tickets: Vec<RecentTicket> = persistence
            .recent_tickets(RECENT_TICKET_LIMIT)
            .map_err(translate_persistence_error)?;
        let upcoming_routes: Vec<UpcomingRoute> = persistence
            .upcoming_routes(&now, UPCOMING_ROUTE_LIMIT)
            .map_err(translate_persistence_error)?;

        debug!(
            paid = stats.paid_tickets,
            cancelled = stats.cancelled_tickets,
            revenue = stats.revenue,
            "Recomputed overview"
        );
        Ok(Self {
            greeting: format!("Welcome, {}", session.greeting_name()),
            stats,
            recent_tickets,
            upcoming_routes,
        })
    }
}
