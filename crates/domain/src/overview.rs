// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::display::route_label;
use crate::ticket::TicketStatus;

/// Summary statistics on the overview screen.
///
/// Recomputed from current rows on every read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub paid_tickets: i64,
    pub cancelled_tickets: i64,
    /// Sum of paid ticket amounts.
    pub revenue: f64,
    pub routes: i64,
    pub clients: i64,
    pub drivers: i64,
    pub vehicles: i64,
}

/// A line of the "recent tickets" panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentTicket {
    pub id: i64,
    pub client_name: Option<String>,
    pub departure_city: Option<String>,
    pub arrival_city: Option<String>,
    pub amount: f64,
    pub sold_at: String,
    pub status: TicketStatus,
}

impl RecentTicket {
    #[must_use]
    pub fn route_label(&self) -> String {
        route_label(self.departure_city.as_deref(), self.arrival_city.as_deref())
    }
}

/// A line of the "upcoming departures" panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingRoute {
    pub id: i64,
    pub departure_city: Option<String>,
    pub arrival_city: Option<String>,
    pub departure_time: String,
    pub driver_name: Option<String>,
    pub vehicle_plate: Option<String>,
}

impl UpcomingRoute {
    #[must_use]
    pub fn route_label(&self) -> String {
        route_label(self.departure_city.as_deref(), self.arrival_city.as_deref())
    }
}
