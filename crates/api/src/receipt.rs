// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Printable ticket receipts.
//!
//! A receipt is a read-only projection of a ticket joined with its client,
//! route, cities, driver and vehicle. It is rendered either as an HTML
//! document for printing or as a plain-text preview.

use std::fmt::Write as _;

use gesttransport_domain::{
    PLACEHOLDER, ReceiptData, TicketStatus, format_price, or_placeholder, ticket_number,
};

/// Footer lines printed under every receipt.
pub const RECEIPT_FOOTER: [&str; 2] = [
    "Have a good trip! Thank you for your trust.",
    "This ticket is valid only for the route shown.",
];

const TITLE: &str = "GestTransport";
const HEADING: &str = "TRAVEL TICKET";

/// One rendered line of a receipt.
enum Line {
    Field(&'static str, String),
    Section(&'static str),
}

/// A ticket receipt ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    data: ReceiptData,
}

impl Receipt {
    #[must_use]
    pub const fn new(data: ReceiptData) -> Self {
        Self { data }
    }

    #[must_use]
    pub const fn data(&self) -> &ReceiptData {
        &self.data
    }

    /// Returns the zero-padded ticket number, e.g. `#000042`.
    #[must_use]
    pub fn number(&self) -> String {
        ticket_number(self.data.ticket_id)
    }

    /// Returns the plate and type of the vehicle, or the placeholder.
    fn vehicle(&self) -> String {
        match (
            self.data.vehicle_plate.as_deref(),
            self.data.vehicle_type.as_deref(),
        ) {
            (Some(plate), Some(kind)) if !kind.trim().is_empty() => format!("{plate} ({kind})"),
            (Some(plate), _) => plate.to_string(),
            (None, _) => PLACEHOLDER.to_string(),
        }
    }

    fn lines(&self) -> Vec<Line> {
        let data: &ReceiptData = &self.data;
        vec![
            Line::Field("Ticket no.", self.number()),
            Line::Field("Purchased", data.sold_at.clone()),
            Line::Field(
                "Client",
                data.client_name()
                    .unwrap_or_else(|| PLACEHOLDER.to_string()),
            ),
            Line::Field(
                "Phone",
                or_placeholder(data.client_phone.as_deref()).to_string(),
            ),
            Line::Section("ROUTE"),
            Line::Field(
                "Departure",
                or_placeholder(data.departure_city.as_deref()).to_string(),
            ),
            Line::Field(
                "Arrival",
                or_placeholder(data.arrival_city.as_deref()).to_string(),
            ),
            Line::Field(
                "Departs at",
                or_placeholder(data.departure_time.as_deref()).to_string(),
            ),
            Line::Field(
                "Arrives at",
                or_placeholder(data.arrival_time.as_deref()).to_string(),
            ),
            Line::Field("Seat", data.seat.to_string()),
            Line::Field(
                "Driver",
                or_placeholder(data.driver_name.as_deref()).to_string(),
            ),
            Line::Field("Vehicle", self.vehicle()),
            Line::Section("PAYMENT"),
            Line::Field("Amount", format_price(data.amount)),
            Line::Field("Status", data.status.as_str().to_uppercase()),
        ]
    }

    /// Renders the print form.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html: String = String::new();
        html.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
        let _ = write!(html, "<title>Ticket {}</title>", self.number());
        html.push_str("</head>\n<body style=\"font-family:Arial;font-size:14px;margin:20px;\">\n");
        html.push_str(
            "<div style=\"border:2px solid #333;padding:20px;max-width:500px;margin:auto;\">\n",
        );
        let _ = writeln!(html, "<h2 style=\"text-align:center;\">{TITLE}</h2>");
        let _ = writeln!(html, "<h3 style=\"text-align:center;\">{HEADING}</h3>");
        html.push_str("<table style=\"width:100%;\">\n");

        let status_color: &str = match self.data.status {
            TicketStatus::Paid => "green",
            TicketStatus::Cancelled => "red",
        };
        for line in self.lines() {
            match line {
                Line::Section(title) => {
                    let _ = writeln!(
                        html,
                        "<tr><td colspan=\"2\" style=\"padding-top:10px;\"><b>{title}</b></td></tr>"
                    );
                }
                Line::Field("Status", value) => {
                    let _ = writeln!(
                        html,
                        "<tr><td><b>Status:</b></td><td style=\"color:{status_color};\">{}</td></tr>",
                        escape_html(&value)
                    );
                }
                Line::Field(label, value) => {
                    let _ = writeln!(
                        html,
                        "<tr><td><b>{label}:</b></td><td>{}</td></tr>",
                        escape_html(&value)
                    );
                }
            }
        }

        html.push_str("</table>\n<p style=\"text-align:center;margin-top:20px;font-size:11px;\">");
        html.push_str(&RECEIPT_FOOTER.join("<br>"));
        html.push_str("</p>\n</div>\n</body></html>\n");
        html
    }

    /// Renders the plain-text preview.
    #[must_use]
    pub fn to_text(&self) -> String {
        const WIDTH: usize = 44;
        let rule: String = "=".repeat(WIDTH);
        let mut text: String = String::new();
        let _ = writeln!(text, "{rule}");
        let _ = writeln!(text, "{TITLE:^WIDTH$}");
        let _ = writeln!(text, "{HEADING:^WIDTH$}");
        let _ = writeln!(text, "{rule}");
        for line in self.lines() {
            match line {
                Line::Section(title) => {
                    let _ = writeln!(text, "{:-^WIDTH$}", format!(" {title} "));
                }
                Line::Field(label, value) => {
                    let _ = writeln!(text, "{:<12}{value}", format!("{label}:"));
                }
            }
        }
        let _ = writeln!(text, "{rule}");
        for footer in RECEIPT_FOOTER {
            let _ = writeln!(text, "{footer}");
        }
        text
    }
}

impl std::fmt::Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped: String = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
