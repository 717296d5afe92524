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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod client;
mod company;
mod display;
mod entity;
mod error;
mod fleet;
mod overview;
mod route;
mod schedule;
mod ticket;
mod user;
mod validation;

#[cfg(test)]
mod tests;

pub use client::{Client, ClientDraft, ClientRow};
pub use company::{Company, CompanyDraft};
pub use display::{
    CURRENCY, PLACEHOLDER, format_amount, format_price, full_name, or_placeholder, route_label,
    ticket_number,
};
pub use entity::{Choice, Entity};
pub use error::DomainError;
pub use fleet::{
    Driver, DriverDraft, DriverRow, VEHICLE_TYPE_SUGGESTIONS, Vehicle, VehicleDraft, VehicleRow,
};
pub use overview::{OverviewStats, RecentTicket, UpcomingRoute};
pub use route::{City, Route, RouteDraft, RouteRow};
pub use schedule::{CalendarDate, ScheduleTime};
pub use ticket::{ReceiptData, SaleDraft, StatusFilter, Ticket, TicketRow, TicketStatus};
pub use user::{Gender, Role, User, UserDraft, UserRow};
pub use validation::{
    FormMode, SEAT_RANGE, Validate, non_blank, optional, optional_date, required,
    required_choice, validate_amount, validate_seat,
};
