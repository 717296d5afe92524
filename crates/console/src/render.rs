// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text tables for the module lists and the overview.

use std::fmt::{self, Display, Write as _};

use gesttransport_api::Overview;
use gesttransport_domain::{
    ClientRow, Company, DriverRow, RouteRow, TicketRow, UserRow, VehicleRow, format_amount,
    format_price, full_name, or_placeholder,
};

/// A left-aligned text table.
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(column, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(column))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or_default()
            })
            .collect()
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let mut line: String = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        let padding: usize = width.saturating_sub(cell.chars().count());
        let _ = write!(line, "{cell}{}  ", " ".repeat(padding));
    }
    writeln!(f, "{}", line.trim_end())
}

impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self.widths();
        let headers: Vec<String> = self.headers.iter().map(ToString::to_string).collect();
        write_row(f, &headers, &widths)?;
        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        write_row(f, &rule, &widths)?;
        if self.rows.is_empty() {
            return writeln!(f, "(no rows)");
        }
        for row in &self.rows {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

fn cell(value: Option<&str>) -> String {
    or_placeholder(value).to_string()
}

pub fn companies(rows: &[Company]) -> Table {
    let mut table: Table = Table::new(&["ID", "Name", "Description", "Phone", "Address"]);
    for row in rows {
        table.push(vec![
            row.id.to_string(),
            row.name.clone(),
            cell(row.description.as_deref()),
            cell(row.phone.as_deref()),
            cell(row.address.as_deref()),
        ]);
    }
    table
}

pub fn vehicles(rows: &[VehicleRow]) -> Table {
    let mut table: Table = Table::new(&["ID", "Plate", "Seats", "Type", "Company"]);
    for row in rows {
        table.push(vec![
            row.id.to_string(),
            row.plate.clone(),
            row.seat_count.to_string(),
            cell(row.vehicle_type.as_deref()),
            cell(row.company_name.as_deref()),
        ]);
    }
    table
}

pub fn drivers(rows: &[DriverRow]) -> Table {
    let mut table: Table = Table::new(&[
        "ID", "Last name", "First name", "Badge", "License", "Hired", "Company",
    ]);
    for row in rows {
        table.push(vec![
            row.id.to_string(),
            row.last_name.clone(),
            row.first_name.clone(),
            cell(row.badge.as_deref()),
            cell(row.license_number.as_deref()),
            cell(row.hire_date.as_deref()),
            cell(row.company_name.as_deref()),
        ]);
    }
    table
}

pub fn clients(rows: &[ClientRow]) -> Table {
    let mut table: Table = Table::new(&["ID", "Last name", "First name", "Phone", "Tickets"]);
    for row in rows {
        table.push(vec![
            row.id.to_string(),
            row.last_name.clone(),
            row.first_name.clone(),
            cell(row.phone.as_deref()),
            row.ticket_count.to_string(),
        ]);
    }
    table
}

pub fn users(rows: &[UserRow]) -> Table {
    let mut table: Table = Table::new(&["ID", "Name", "Login", "Phone", "Gender", "Role"]);
    for row in rows {
        table.push(vec![
            row.id.to_string(),
            full_name(&row.last_name, &row.first_name),
            row.login.clone(),
            cell(row.phone.as_deref()),
            row.gender.to_string(),
            cell(row.role_name.as_deref()),
        ]);
    }
    table
}

pub fn routes(rows: &[RouteRow]) -> Table {
    let mut table: Table = Table::new(&[
        "ID", "From", "To", "Departure", "Arrival", "Driver", "Vehicle", "Price", "Seats",
    ]);
    for row in rows {
        table.push(vec![
            row.id.to_string(),
            cell(row.departure_city.as_deref()),
            cell(row.arrival_city.as_deref()),
            row.departure_time.clone(),
            row.arrival_time.clone(),
            cell(row.driver_name.as_deref()),
            cell(row.vehicle_plate.as_deref()),
            format_amount(row.price),
            row.seat_count
                .map_or_else(|| cell(None), |seats| seats.to_string()),
        ]);
    }
    table
}

pub fn tickets(rows: &[TicketRow]) -> Table {
    let mut table: Table = Table::new(&[
        "ID", "Sold", "Client", "Route", "Seat", "Amount", "Status", "Operator",
    ]);
    for row in rows {
        table.push(vec![
            row.id.to_string(),
            row.sold_at.clone(),
            cell(row.client_name.as_deref()),
            row.route_label(),
            row.seat.to_string(),
            format_amount(row.amount),
            row.status.to_string(),
            cell(row.operator_name.as_deref()),
        ]);
    }
    table
}

/// Renders the overview: greeting, statistics, recent tickets and upcoming departures.
pub fn overview(overview: &Overview) -> String {
    let stats = &overview.stats;
    let mut text: String = String::new();
    let _ = writeln!(text, "{}\n", overview.greeting);
    let _ = writeln!(text, "Paid tickets:      {}", stats.paid_tickets);
    let _ = writeln!(text, "Cancelled tickets: {}", stats.cancelled_tickets);
    let _ = writeln!(text, "Revenue:           {}", format_price(stats.revenue));
    let _ = writeln!(text, "Routes:            {}", stats.routes);
    let _ = writeln!(text, "Clients:           {}", stats.clients);
    let _ = writeln!(text, "Drivers:           {}", stats.drivers);
    let _ = writeln!(text, "Vehicles:          {}", stats.vehicles);

    let mut recent: Table = Table::new(&["ID", "Client", "Route", "Amount", "Date", "Status"]);
    for ticket in &overview.recent_tickets {
        recent.push(vec![
            ticket.id.to_string(),
            cell(ticket.client_name.as_deref()),
            ticket.route_label(),
            format_amount(ticket.amount),
            ticket.sold_at.clone(),
            ticket.status.to_string(),
        ]);
    }
    let _ = write!(text, "\nRecent tickets\n{recent}");

    let mut upcoming: Table = Table::new(&["ID", "Route", "Departure", "Driver", "Vehicle"]);
    for route in &overview.upcoming_routes {
        upcoming.push(vec![
            route.id.to_string(),
            route.route_label(),
            route.departure_time.clone(),
            cell(route.driver_name.as_deref()),
            cell(route.vehicle_plate.as_deref()),
        ]);
    }
    let _ = write!(text, "\nUpcoming departures\n{upcoming}");
    text
}
