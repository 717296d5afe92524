// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Formatting shared by list views and receipts.

/// Rendered in place of a missing value or a dangling reference.
pub const PLACEHOLDER: &str = "—";

/// Currency suffix printed after amounts.
pub const CURRENCY: &str = "FCFA";

/// Returns the value, or the placeholder when it is absent or blank.
#[must_use]
pub fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => PLACEHOLDER,
    }
}

/// Joins a last and first name the way lists display people.
#[must_use]
pub fn full_name(last_name: &str, first_name: &str) -> String {
    format!("{last_name} {first_name}").trim().to_string()
}

/// Formats a route label such as `Dakar → Thiès`.
#[must_use]
pub fn route_label(departure: Option<&str>, arrival: Option<&str>) -> String {
    format!(
        "{} → {}",
        or_placeholder(departure),
        or_placeholder(arrival)
    )
}

/// Formats an amount rounded to the unit with thousands separators.
///
/// `1_234_567.4` renders as `1,234,567`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_amount(amount: f64) -> String {
    let rounded: i64 = amount.round() as i64;
    let digits: String = rounded.unsigned_abs().to_string();
    let mut grouped: String = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats an amount followed by the currency, e.g. `2,000 FCFA`.
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("{} {CURRENCY}", format_amount(amount))
}

/// Formats a ticket number zero-padded to six digits, e.g. `#000042`.
#[must_use]
pub fn ticket_number(id: i64) -> String {
    format!("#{id:06}")
}
