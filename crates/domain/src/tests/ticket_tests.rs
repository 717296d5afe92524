// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, FormMode, ReceiptData, SaleDraft, StatusFilter, TicketStatus, Validate};

fn create_test_receipt() -> ReceiptData {
    ReceiptData {
        ticket_id: 12,
        sold_at: String::from("2026-02-20 09:15"),
        client_last_name: Some(String::from("Diallo")),
        client_first_name: Some(String::from("Awa")),
        client_phone: None,
        departure_city: Some(String::from("Dakar")),
        arrival_city: Some(String::from("Thiès")),
        departure_time: Some(String::from("2026-03-01 08:00")),
        arrival_time: Some(String::from("2026-03-01 10:30")),
        seat: 12,
        driver_name: None,
        vehicle_plate: None,
        vehicle_type: None,
        amount: 2000.0,
        status: TicketStatus::Paid,
    }
}

#[test]
fn test_ticket_status_parsing() {
    assert_eq!("paid".parse::<TicketStatus>(), Ok(TicketStatus::Paid));
    assert_eq!("Cancelled".parse::<TicketStatus>(), Ok(TicketStatus::Cancelled));
    assert!(matches!(
        "refunded".parse::<TicketStatus>(),
        Err(DomainError::InvalidTicketStatus(_))
    ));
}

#[test]
fn test_status_filter_parsing() {
    assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
    assert_eq!(
        "cancelled".parse::<StatusFilter>(),
        Ok(StatusFilter::Only(TicketStatus::Cancelled))
    );
    assert_eq!(StatusFilter::All.status(), None);
}

#[test]
fn test_sale_requires_client_then_route() {
    let draft: SaleDraft = SaleDraft::default();
    assert_eq!(
        draft.validated(FormMode::Create),
        Err(DomainError::MissingField { field: "client" })
    );

    let draft: SaleDraft = SaleDraft {
        client_id: Some(1),
        ..SaleDraft::default()
    };
    assert_eq!(
        draft.validated(FormMode::Create),
        Err(DomainError::MissingField { field: "route" })
    );
}

#[test]
fn test_sale_seat_and_amount_bounds() {
    let mut draft: SaleDraft = SaleDraft {
        client_id: Some(1),
        route_id: Some(1),
        seat: 12,
        amount: 2000.0,
    };
    assert!(draft.validated(FormMode::Create).is_ok());

    draft.seat = 0;
    assert_eq!(
        draft.validated(FormMode::Create),
        Err(DomainError::InvalidSeat { seat: 0 })
    );

    draft.seat = 12;
    draft.amount = f64::NAN;
    assert_eq!(
        draft.validated(FormMode::Create),
        Err(DomainError::InvalidAmount { field: "amount" })
    );
}

#[test]
fn test_receipt_labels() {
    let mut receipt: ReceiptData = create_test_receipt();
    assert_eq!(receipt.client_name().as_deref(), Some("Diallo Awa"));
    assert_eq!(receipt.route_label(), "Dakar → Thiès");

    receipt.client_last_name = None;
    receipt.client_first_name = None;
    assert_eq!(receipt.client_name(), None);
}
