// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::display::{full_name, route_label};
use crate::error::DomainError;
use crate::validation::{
    FormMode, Validate, required_choice, validate_amount, validate_seat,
};

/// Lifecycle of a sold ticket.
///
/// Tickets are never deleted. The only transition is `Paid` to `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TicketStatus {
    #[default]
    Paid,
    Cancelled,
}

impl TicketStatus {
    /// Returns the stored status text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paid" => Ok(Self::Paid),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidTicketStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Restricts the ticket list to one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TicketStatus),
}

impl StatusFilter {
    /// Returns the status to match, or `None` for all tickets.
    #[must_use]
    pub const fn status(&self) -> Option<TicketStatus> {
        match self {
            Self::All => None,
            Self::Only(status) => Some(*status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<TicketStatus>().map(Self::Only)
    }
}

/// A stored ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    /// Local sale time, `YYYY-MM-DD HH:MM`.
    pub sold_at: String,
    pub seat: i32,
    /// Amount actually charged; may differ from the route price.
    pub amount: f64,
    pub status: TicketStatus,
    pub route_id: i64,
    pub client_id: i64,
    /// The operator who made the sale.
    pub user_id: Option<i64>,
}

/// A ticket as shown in the ticket list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketRow {
    pub id: i64,
    pub sold_at: String,
    pub client_name: Option<String>,
    pub departure_city: Option<String>,
    pub arrival_city: Option<String>,
    pub seat: i32,
    pub amount: f64,
    pub status: TicketStatus,
    pub operator_name: Option<String>,
}

impl TicketRow {
    /// Returns `Departure → Arrival`.
    #[must_use]
    pub fn route_label(&self) -> String {
        route_label(self.departure_city.as_deref(), self.arrival_city.as_deref())
    }
}

/// Sale form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDraft {
    pub client_id: Option<i64>,
    pub route_id: Option<i64>,
    pub seat: i32,
    pub amount: f64,
}

impl Default for SaleDraft {
    fn default() -> Self {
        Self {
            client_id: None,
            route_id: None,
            seat: 1,
            amount: 0.0,
        }
    }
}

impl Validate for SaleDraft {
    fn validated(&self, _mode: FormMode) -> Result<Self, DomainError> {
        Ok(Self {
            client_id: Some(required_choice("client", self.client_id)?),
            route_id: Some(required_choice("route", self.route_id)?),
            seat: validate_seat(self.seat)?,
            amount: validate_amount("amount", self.amount)?,
        })
    }
}

/// Everything printed on a ticket receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptData {
    pub ticket_id: i64,
    pub sold_at: String,
    pub client_last_name: Option<String>,
    pub client_first_name: Option<String>,
    pub client_phone: Option<String>,
    pub departure_city: Option<String>,
    pub arrival_city: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub seat: i32,
    pub driver_name: Option<String>,
    pub vehicle_plate: Option<String>,
    pub vehicle_type: Option<String>,
    pub amount: f64,
    pub status: TicketStatus,
}

impl ReceiptData {
    /// Returns the client's full name, or `None` if the client is gone.
    #[must_use]
    pub fn client_name(&self) -> Option<String> {
        match (&self.client_last_name, &self.client_first_name) {
            (None, None) => None,
            (last, first) => Some(full_name(
                last.as_deref().unwrap_or_default(),
                first.as_deref().unwrap_or_default(),
            )),
        }
    }

    /// Returns `Departure → Arrival`.
    #[must_use]
    pub fn route_label(&self) -> String {
        route_label(self.departure_city.as_deref(), self.arrival_city.as_deref())
    }
}
