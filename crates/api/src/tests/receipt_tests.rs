// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gesttransport_domain::{ClientDraft, ReceiptData, TicketStatus};
use gesttransport_persistence::Persistence;

use crate::tests::helpers::{
    create_test_admin_session, create_test_persistence, create_test_route,
};
use crate::{RECEIPT_FOOTER, Receipt, SaleForm, Session, TicketDesk};

fn create_test_receipt_data() -> ReceiptData {
    ReceiptData {
        ticket_id: 42,
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
        vehicle_plate: Some(String::from("DK-1234-A")),
        vehicle_type: Some(String::from("Bus")),
        amount: 2000.0,
        status: TicketStatus::Paid,
    }
}

#[test]
fn test_text_receipt_shows_formatted_fields() {
    let receipt: Receipt = Receipt::new(create_test_receipt_data());

    let text: String = receipt.to_text();

    assert_eq!(receipt.number(), "#000042");
    assert!(text.contains("#000042"));
    assert!(text.contains("Diallo Awa"));
    assert!(text.contains("Phone:      —"));
    assert!(text.contains("Driver:     —"));
    assert!(text.contains("DK-1234-A (Bus)"));
    assert!(text.contains("2,000 FCFA"));
    assert!(text.contains("PAID"));
    for footer in RECEIPT_FOOTER {
        assert!(text.contains(footer));
    }
    assert_eq!(receipt.to_string(), text);
}

#[test]
fn test_html_receipt_escapes_stored_text() {
    let mut data: ReceiptData = create_test_receipt_data();
    data.client_last_name = Some(String::from("<Diallo>"));
    data.status = TicketStatus::Cancelled;

    let html: String = Receipt::new(data).to_html();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("&lt;Diallo&gt; Awa"));
    assert!(!html.contains("<Diallo>"));
    assert!(html.contains("CANCELLED"));
    assert!(html.contains("color:red;"));
    assert!(html.contains("Have a good trip! Thank you for your trust."));
}

#[test]
fn test_receipt_for_missing_ticket_is_none() {
    let mut persistence: Persistence = create_test_persistence();

    let receipt: Option<Receipt> = TicketDesk::receipt(&mut persistence, 42).unwrap();

    assert!(receipt.is_none());
}

#[test]
fn test_receipt_joins_sold_ticket() {
    let mut persistence: Persistence = create_test_persistence();
    let session: Session = create_test_admin_session(&mut persistence);
    create_test_route(&mut persistence, "Dakar", "Thiès", "2026-03-01 08:00", 12_500.0);
    let mut desk: TicketDesk = TicketDesk::default();

    let mut form: SaleForm = TicketDesk::open_sale_form(&mut persistence).unwrap();
    form.quick_add_client(&mut persistence, &ClientDraft::new("Diallo", "Awa", "77 000 11 22"))
        .unwrap();
    form.draft.seat = 3;
    let ticket_id: i64 = desk.save(&mut persistence, &session, &form).unwrap();

    let receipt: Receipt = TicketDesk::receipt(&mut persistence, ticket_id)
        .unwrap()
        .unwrap();

    assert_eq!(receipt.data().route_label(), "Dakar → Thiès");
    assert_eq!(receipt.data().client_phone.as_deref(), Some("77 000 11 22"));
    assert_eq!(receipt.data().seat, 3);
    assert!(receipt.to_text().contains("12,500 FCFA"));
    assert!(receipt.to_text().contains("Vehicle:    —"));
}
