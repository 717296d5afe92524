// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ClientDraft, CompanyDraft, DomainError, DriverDraft, Entity, FormMode, Gender, RouteDraft,
    User, UserDraft, Validate, VehicleDraft, non_blank,
};

fn create_test_user_draft() -> UserDraft {
    UserDraft {
        last_name: String::from("Ndiaye"),
        first_name: String::from("Moussa"),
        login: String::from("mndiaye"),
        password: String::from("secret"),
        ..UserDraft::default()
    }
}

fn create_test_route_draft() -> RouteDraft {
    RouteDraft {
        departure_city_id: Some(1),
        arrival_city_id: Some(2),
        departure_time: String::from("2026-03-01 08:00"),
        arrival_time: String::from("2026-03-01 10:30"),
        driver_id: None,
        vehicle_id: None,
        price: 2000.0,
    }
}

#[test]
fn test_company_requires_trimmed_name() {
    let draft: CompanyDraft = CompanyDraft {
        name: String::from("   "),
        ..CompanyDraft::default()
    };
    assert_eq!(
        draft.validated(FormMode::Create),
        Err(DomainError::MissingField { field: "name" })
    );
}

#[test]
fn test_company_fields_are_trimmed() {
    let draft: CompanyDraft = CompanyDraft {
        name: String::from("  Dem Dikk "),
        phone: String::from(" 33 800 00 00"),
        ..CompanyDraft::default()
    };
    let validated: CompanyDraft = draft.validated(FormMode::Create).unwrap();
    assert_eq!(validated.name, "Dem Dikk");
    assert_eq!(validated.phone, "33 800 00 00");
}

#[test]
fn test_vehicle_defaults() {
    let draft: VehicleDraft = VehicleDraft::default();
    assert_eq!(draft.seat_count, 1);
    assert_eq!(draft.vehicle_type, "Bus");
    assert!(draft.company_id.is_none());
}

#[test]
fn test_vehicle_seat_count_range() {
    let mut draft: VehicleDraft = VehicleDraft {
        plate: String::from("DK-1234-A"),
        ..VehicleDraft::default()
    };
    draft.seat_count = 0;
    assert_eq!(
        draft.validated(FormMode::Create),
        Err(DomainError::InvalidSeat { seat: 0 })
    );
    draft.seat_count = 201;
    assert!(draft.validated(FormMode::Create).is_err());
    draft.seat_count = 200;
    assert!(draft.validated(FormMode::Create).is_ok());
}

#[test]
fn test_vehicle_type_accepts_free_text() {
    let draft: VehicleDraft = VehicleDraft {
        plate: String::from("TH-0001-B"),
        vehicle_type: String::from("Ndiaga Ndiaye"),
        ..VehicleDraft::default()
    };
    assert_eq!(
        draft.validated(FormMode::Create).unwrap().vehicle_type,
        "Ndiaga Ndiaye"
    );
}

#[test]
fn test_driver_requires_both_names() {
    let draft: DriverDraft = DriverDraft {
        last_name: String::from("Sow"),
        ..DriverDraft::default()
    };
    assert_eq!(
        draft.validated(FormMode::Create),
        Err(DomainError::MissingField {
            field: "first_name"
        })
    );
}

#[test]
fn test_driver_hire_date_is_optional_but_checked() {
    let mut draft: DriverDraft = DriverDraft {
        last_name: String::from("Sow"),
        first_name: String::from("Ibrahima"),
        ..DriverDraft::default()
    };
    assert!(draft.validated(FormMode::Create).is_ok());

    draft.hire_date = String::from("15/01/2020");
    assert!(matches!(
        draft.validated(FormMode::Create),
        Err(DomainError::InvalidDate {
            field: "hire_date",
            ..
        })
    ));
}

#[test]
fn test_client_requires_last_name() {
    let draft: ClientDraft = ClientDraft::new(" ", "Awa", "");
    assert_eq!(
        draft.validated(FormMode::Create),
        Err(DomainError::MissingField { field: "last_name" })
    );
}

#[test]
fn test_user_password_required_on_create_only() {
    let mut draft: UserDraft = create_test_user_draft();
    draft.password = String::new();

    assert_eq!(
        draft.validated(FormMode::Create),
        Err(DomainError::MissingField { field: "password" })
    );
    let edited: UserDraft = draft.validated(FormMode::Edit(3)).unwrap();
    assert!(edited.new_password().is_none());
}

#[test]
fn test_user_draft_from_record_leaves_password_blank() {
    let user: User = User {
        id: 7,
        last_name: String::from("Fall"),
        first_name: String::from("Khady"),
        phone: None,
        birth_date: Some(String::from("1990-05-04")),
        gender: Gender::Female,
        login: String::from("kfall"),
        role_id: Some(2),
        company_id: Some(1),
    };
    let draft: UserDraft = user.to_draft();
    assert!(draft.password.is_empty());
    assert_eq!(draft.birth_date, "1990-05-04");
    assert_eq!(draft.gender, Gender::Female);
}

#[test]
fn test_user_cannot_delete_self() {
    assert_eq!(User::check_delete(4, 4), Err(DomainError::SelfDeletion));
    assert_eq!(User::check_delete(5, 4), Ok(()));
}

#[test]
fn test_gender_codes() {
    assert_eq!("F".parse::<Gender>(), Ok(Gender::Female));
    assert_eq!(" m ".parse::<Gender>(), Ok(Gender::Male));
    assert!("X".parse::<Gender>().is_err());
    assert_eq!(Gender::default().as_str(), "M");
}

#[test]
fn test_route_requires_cities_and_times() {
    let mut draft: RouteDraft = create_test_route_draft();
    draft.arrival_city_id = None;
    assert_eq!(
        draft.validated(FormMode::Create),
        Err(DomainError::MissingField {
            field: "arrival_city"
        })
    );

    let mut draft: RouteDraft = create_test_route_draft();
    draft.departure_time = String::new();
    assert_eq!(
        draft.validated(FormMode::Create),
        Err(DomainError::MissingField {
            field: "departure_time"
        })
    );
}

#[test]
fn test_route_accepts_arrival_before_departure_and_same_city() {
    let mut draft: RouteDraft = create_test_route_draft();
    draft.arrival_city_id = draft.departure_city_id;
    draft.arrival_time = String::from("2026-02-28 06:00");
    assert!(draft.validated(FormMode::Create).is_ok());
}

#[test]
fn test_route_rejects_negative_price() {
    let mut draft: RouteDraft = create_test_route_draft();
    draft.price = -1.0;
    assert_eq!(
        draft.validated(FormMode::Create),
        Err(DomainError::InvalidAmount { field: "price" })
    );
}

#[test]
fn test_non_blank_maps_empty_to_none() {
    assert_eq!(non_blank("  "), None);
    assert_eq!(non_blank(" B-12 "), Some("B-12"));
}
