// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gesttransport_domain::{
    Client, ClientDraft, Company, CompanyDraft, Driver, DriverDraft, FormMode, User, Vehicle,
    VehicleDraft,
};
use gesttransport_persistence::Persistence;

use crate::tests::helpers::{
    ScriptedConfirmation, create_test_admin_session, create_test_agent_session,
    create_test_persistence,
};
use crate::{ApiError, CrudModule, Decision, Form, Session};

fn company_form(name: &str, phone: &str) -> Form<Company> {
    let mut form: Form<Company> = Form::create();
    form.draft = CompanyDraft {
        name: name.to_string(),
        phone: phone.to_string(),
        ..CompanyDraft::default()
    };
    form
}

fn vehicle_form(plate: &str, company_id: Option<i64>) -> Form<Vehicle> {
    let mut form: Form<Vehicle> = Form::create();
    form.draft = VehicleDraft {
        plate: plate.to_string(),
        seat_count: 30,
        company_id,
        ..VehicleDraft::default()
    };
    form
}

#[test]
fn test_refresh_lists_seeded_company() {
    let mut persistence: Persistence = create_test_persistence();
    let mut companies: CrudModule<Company> = CrudModule::new();

    let rows: Vec<Company> = companies.refresh(&mut persistence).unwrap().to_vec();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Ma Société");
}

#[test]
fn test_save_refreshes_list_and_search_filters_rows() {
    let mut persistence: Persistence = create_test_persistence();
    let mut companies: CrudModule<Company> = CrudModule::new();

    companies
        .save(&mut persistence, &company_form("  Dem Dikk  ", "33 800 00 00"))
        .unwrap();
    companies
        .save(&mut persistence, &company_form("Senbus", ""))
        .unwrap();
    assert_eq!(companies.rows().len(), 3);
    assert!(companies.rows().iter().any(|c| c.name == "Dem Dikk"));

    let matched: Vec<String> = companies
        .search(&mut persistence, "dikk")
        .unwrap()
        .iter()
        .map(|c| c.name.clone())
        .collect();
    assert_eq!(matched, vec![String::from("Dem Dikk")]);
    assert_eq!(companies.filter(), "dikk");

    let by_phone: usize = companies.search(&mut persistence, "800").unwrap().len();
    assert_eq!(by_phone, 1);

    let all: usize = companies.search(&mut persistence, "").unwrap().len();
    assert_eq!(all, 3);
}

#[test]
fn test_blank_required_field_never_reaches_the_database() {
    let mut persistence: Persistence = create_test_persistence();
    let mut clients: CrudModule<Client> = CrudModule::new();

    let mut form: Form<Client> = Form::create();
    form.draft = ClientDraft::new("   ", "Awa", "");

    let result = clients.save(&mut persistence, &form);

    assert!(matches!(
        result,
        Err(ApiError::Validation { ref field, .. }) if field == "last_name"
    ));
    assert!(result.unwrap_err().is_validation());
    assert!(persistence.list_clients("").unwrap().is_empty());
    assert_eq!(form.draft.first_name, "Awa");
}

#[test]
fn test_edit_form_is_prefilled_and_updates_in_place() {
    let mut persistence: Persistence = create_test_persistence();
    let mut drivers: CrudModule<Driver> = CrudModule::new();

    let mut form: Form<Driver> = Form::create();
    form.draft = DriverDraft {
        last_name: String::from("Fall"),
        first_name: String::from("Cheikh"),
        badge: String::from("B-001"),
        hire_date: String::from("2024-05-02"),
        ..DriverDraft::default()
    };
    let driver_id: i64 = drivers.save(&mut persistence, &form).unwrap();

    let mut edit: Form<Driver> =
        CrudModule::<Driver>::open_form(&mut persistence, Some(driver_id)).unwrap();
    assert_eq!(edit.mode(), FormMode::Edit(driver_id));
    assert_eq!(edit.draft.badge, "B-001");
    assert_eq!(edit.draft.hire_date, "2024-05-02");

    edit.draft.first_name = String::from("Cheikh Tidiane");
    assert_eq!(drivers.save(&mut persistence, &edit).unwrap(), driver_id);

    assert_eq!(drivers.rows().len(), 1);
    assert_eq!(drivers.rows()[0].first_name, "Cheikh Tidiane");
}

#[test]
fn test_open_form_for_missing_row_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result = CrudModule::<Vehicle>::open_form(&mut persistence, Some(404));

    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}

#[test]
fn test_duplicate_plate_is_a_persistence_error_and_keeps_existing_row() {
    let mut persistence: Persistence = create_test_persistence();
    let mut vehicles: CrudModule<Vehicle> = CrudModule::new();

    vehicles
        .save(&mut persistence, &vehicle_form("DK-1234-A", None))
        .unwrap();
    let mut duplicate: Form<Vehicle> = vehicle_form("DK-1234-A", None);
    duplicate.draft.seat_count = 12;

    let result = vehicles.save(&mut persistence, &duplicate);

    assert!(matches!(result, Err(ApiError::Persistence { ref message }) if message.contains("UNIQUE")));
    assert_eq!(vehicles.rows().len(), 1);
    assert_eq!(vehicles.rows()[0].seat_count, 30);
}

#[test]
fn test_declined_delete_keeps_row() {
    let mut persistence: Persistence = create_test_persistence();
    let session: Session = create_test_admin_session(&mut persistence);
    let mut companies: CrudModule<Company> = CrudModule::new();
    let company_id: i64 = companies
        .save(&mut persistence, &company_form("Senbus", ""))
        .unwrap();

    let mut confirmation: ScriptedConfirmation = ScriptedConfirmation::declining();
    let decision: Decision = companies
        .delete(&mut persistence, company_id, &session, &mut confirmation)
        .unwrap();

    assert_eq!(decision, Decision::Cancelled);
    assert_eq!(confirmation.prompts, vec![String::from("Delete this company?")]);
    assert!(persistence.get_company(company_id).unwrap().is_some());
}

#[test]
fn test_deleting_company_leaves_vehicles_with_placeholder_reference() {
    let mut persistence: Persistence = create_test_persistence();
    let session: Session = create_test_admin_session(&mut persistence);
    let mut companies: CrudModule<Company> = CrudModule::new();
    let mut vehicles: CrudModule<Vehicle> = CrudModule::new();

    let company_id: i64 = companies
        .save(&mut persistence, &company_form("Senbus", ""))
        .unwrap();
    vehicles
        .save(&mut persistence, &vehicle_form("TH-77-B", Some(company_id)))
        .unwrap();
    assert_eq!(vehicles.rows()[0].company_name.as_deref(), Some("Senbus"));

    let decision: Decision = companies
        .delete(&mut persistence, company_id, &session, &mut |_: &str| true)
        .unwrap();
    assert_eq!(decision, Decision::Confirmed);

    // The vehicle list is not refreshed by a company deletion.
    assert_eq!(vehicles.rows()[0].company_name.as_deref(), Some("Senbus"));

    vehicles.refresh(&mut persistence).unwrap();
    assert_eq!(vehicles.rows().len(), 1);
    assert!(vehicles.rows()[0].company_name.is_none());
}

#[test]
fn test_operator_cannot_delete_own_account() {
    let mut persistence: Persistence = create_test_persistence();
    let session: Session = create_test_admin_session(&mut persistence);
    let mut users: CrudModule<User> = CrudModule::new();

    let mut confirmation: ScriptedConfirmation = ScriptedConfirmation::accepting();
    let result = users.delete(&mut persistence, session.user_id, &session, &mut confirmation);

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
    assert!(confirmation.prompts.is_empty());
    assert!(persistence.get_user(session.user_id).unwrap().is_some());
}

#[test]
fn test_other_operator_may_delete_an_account() {
    let mut persistence: Persistence = create_test_persistence();
    let admin: Session = create_test_admin_session(&mut persistence);
    let agent: Session = create_test_agent_session();
    let mut users: CrudModule<User> = CrudModule::new();

    let decision: Decision = users
        .delete(&mut persistence, admin.user_id, &agent, &mut |_: &str| true)
        .unwrap();

    assert_eq!(decision, Decision::Confirmed);
    assert!(users.rows().is_empty());
}

#[test]
fn test_deleting_missing_row_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let session: Session = create_test_admin_session(&mut persistence);
    let mut clients: CrudModule<Client> = CrudModule::new();

    let result = clients.delete(&mut persistence, 77, &session, &mut |_: &str| true);

    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}
