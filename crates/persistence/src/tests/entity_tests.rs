// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gesttransport_domain::{
    ClientDraft, CompanyDraft, DriverDraft, Gender, RouteRow, UserDraft, VehicleDraft,
};

use super::{
    create_test_city, create_test_client, create_test_driver, create_test_persistence,
    create_test_route, create_test_route_draft, create_test_ticket, create_test_vehicle,
};
use crate::{Persistence, PersistenceError};

#[test]
fn test_company_round_trip_stores_blank_optionals_as_null() {
    let mut persistence: Persistence = create_test_persistence();

    let company_id: i64 = persistence
        .create_company(&CompanyDraft {
            name: String::from("Dem Dikk"),
            description: String::from("  "),
            phone: String::from("33 800 00 00"),
            address: String::new(),
        })
        .unwrap();

    let company = persistence.get_company(company_id).unwrap().unwrap();
    assert_eq!(company.name, "Dem Dikk");
    assert_eq!(company.description, None);
    assert_eq!(company.phone.as_deref(), Some("33 800 00 00"));
    assert_eq!(company.address, None);
}

#[test]
fn test_company_filter_matches_name_phone_and_address() {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .create_company(&CompanyDraft {
            name: String::from("Dem Dikk"),
            address: String::from("Avenue Malick Sy"),
            ..CompanyDraft::default()
        })
        .unwrap();

    assert_eq!(persistence.list_companies("").unwrap().len(), 2);
    assert_eq!(persistence.list_companies("dikk").unwrap().len(), 1);
    assert_eq!(persistence.list_companies("malick").unwrap().len(), 1);
    assert!(persistence.list_companies("Kaolack").unwrap().is_empty());
}

#[test]
fn test_duplicate_plate_is_rejected_and_original_kept() {
    let mut persistence: Persistence = create_test_persistence();
    let vehicle_id: i64 = create_test_vehicle(&mut persistence, "DK-1234-A");

    let duplicate = persistence.create_vehicle(&VehicleDraft {
        plate: String::from("DK-1234-A"),
        seat_count: 15,
        ..VehicleDraft::default()
    });

    assert!(matches!(duplicate, Err(PersistenceError::UniqueViolation(_))));
    let vehicles = persistence.list_vehicles("").unwrap();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].id, vehicle_id);
    assert_eq!(vehicles[0].seat_count, 60);
}

#[test]
fn test_unique_violation_carries_raw_message() {
    let mut persistence: Persistence = create_test_persistence();
    create_test_city(&mut persistence, "Dakar");

    let err: PersistenceError = persistence.create_city("Dakar").unwrap_err();
    assert!(err.to_string().contains("UNIQUE constraint failed: cities.name"));
}

#[test]
fn test_duplicate_badge_and_login_are_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    create_test_driver(&mut persistence, "Sow", "B-001");

    let driver = persistence.create_driver(&DriverDraft {
        last_name: String::from("Ba"),
        first_name: String::from("Omar"),
        badge: String::from("B-001"),
        ..DriverDraft::default()
    });
    assert!(matches!(driver, Err(PersistenceError::UniqueViolation(_))));

    let user = persistence.create_user(&UserDraft {
        last_name: String::from("Other"),
        first_name: String::from("Admin"),
        login: String::from("admin"),
        password: String::from("x"),
        ..UserDraft::default()
    });
    assert!(matches!(user, Err(PersistenceError::UniqueViolation(_))));
    assert_eq!(persistence.list_users("").unwrap().len(), 1);
}

#[test]
fn test_drivers_without_badge_do_not_collide() {
    let mut persistence: Persistence = create_test_persistence();
    create_test_driver(&mut persistence, "Sow", "");
    create_test_driver(&mut persistence, "Ba", "  ");

    let drivers = persistence.list_drivers("").unwrap();
    assert_eq!(drivers.len(), 2);
    assert!(drivers.iter().all(|driver| driver.badge.is_none()));
}

#[test]
fn test_vehicle_list_joins_company_and_survives_company_deletion() {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .create_vehicle(&VehicleDraft {
            plate: String::from("TH-0001-B"),
            seat_count: 30,
            vehicle_type: String::from("Minibus"),
            company_id: Some(1),
        })
        .unwrap();

    let before = persistence.list_vehicles("").unwrap();
    assert_eq!(before[0].company_name.as_deref(), Some("Ma Société"));

    persistence.delete_company(1).unwrap();

    let after = persistence.list_vehicles("minibus").unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].company_name, None);
    let vehicle = persistence.get_vehicle(after[0].id).unwrap().unwrap();
    assert_eq!(vehicle.company_id, Some(1));
}

#[test]
fn test_update_missing_row_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let result = persistence.update_client(99, &ClientDraft::new("Diallo", "Awa", ""));
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
    assert!(matches!(
        persistence.delete_driver(99),
        Err(PersistenceError::NotFound(_))
    ));
}

#[test]
fn test_clients_are_ordered_by_last_name_with_ticket_counts() {
    let mut persistence: Persistence = create_test_persistence();
    let sarr: i64 = create_test_client(&mut persistence, "Sarr", "Fatou");
    let diallo: i64 = create_test_client(&mut persistence, "Diallo", "Awa");
    let route_id: i64 = create_test_route(&mut persistence);
    create_test_ticket(&mut persistence, route_id, diallo, 1);
    create_test_ticket(&mut persistence, route_id, diallo, 2);

    let clients = persistence.list_clients("").unwrap();
    assert_eq!(clients[0].id, diallo);
    assert_eq!(clients[0].ticket_count, 2);
    assert_eq!(clients[1].id, sarr);
    assert_eq!(clients[1].ticket_count, 0);

    assert_eq!(persistence.list_clients("fatou").unwrap().len(), 1);
}

#[test]
fn test_client_filter_matches_null_phone_only_when_blank() {
    let mut persistence: Persistence = create_test_persistence();
    create_test_client(&mut persistence, "Diallo", "Awa");

    assert_eq!(persistence.list_clients("   ").unwrap().len(), 1);
    assert!(persistence.list_clients("77").unwrap().is_empty());
}

#[test]
fn test_user_edit_with_blank_password_keeps_hash() {
    let mut persistence: Persistence = create_test_persistence();
    let user_id: i64 = persistence
        .create_user(&UserDraft {
            last_name: String::from("Fall"),
            first_name: String::from("Khady"),
            login: String::from("kfall"),
            password: String::from("first"),
            gender: Gender::Female,
            role_id: Some(2),
            ..UserDraft::default()
        })
        .unwrap();
    let original_hash: String = persistence.get_password_hash(user_id).unwrap().unwrap();

    let mut draft: UserDraft = UserDraft {
        last_name: String::from("Fall"),
        first_name: String::from("Khadija"),
        login: String::from("kfall"),
        gender: Gender::Female,
        role_id: Some(2),
        ..UserDraft::default()
    };
    persistence.update_user(user_id, &draft).unwrap();
    assert_eq!(
        persistence.get_password_hash(user_id).unwrap().unwrap(),
        original_hash
    );
    assert_eq!(
        persistence.get_user(user_id).unwrap().unwrap().first_name,
        "Khadija"
    );

    draft.password = String::from("second");
    persistence.update_user(user_id, &draft).unwrap();
    assert!(
        persistence
            .find_user_by_credentials("kfall", "second")
            .unwrap()
            .is_some()
    );
}

#[test]
fn test_user_list_filter_and_role_name() {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .create_user(&UserDraft {
            last_name: String::from("Ndiaye"),
            first_name: String::from("Moussa"),
            login: String::from("mndiaye"),
            password: String::from("pw"),
            role_id: Some(2),
            ..UserDraft::default()
        })
        .unwrap();

    let agents = persistence.list_users("ndiaye").unwrap();
    assert_eq!(agents.len(), 1);
    assert_eq!(agents[0].role_name.as_deref(), Some("Agent"));
    assert_eq!(agents[0].gender, Gender::Male);
}

#[test]
fn test_route_list_is_newest_first_and_filters_on_city() {
    let mut persistence: Persistence = create_test_persistence();
    let first: i64 = create_test_route(&mut persistence);
    let kaolack: i64 = create_test_city(&mut persistence, "Kaolack");
    let dakar: i64 = persistence.find_city_by_name("Dakar").unwrap().unwrap().id;
    let second: i64 = persistence
        .create_route(&create_test_route_draft(dakar, kaolack))
        .unwrap();

    let routes: Vec<RouteRow> = persistence.list_routes("").unwrap();
    assert_eq!(routes.iter().map(|r| r.id).collect::<Vec<_>>(), vec![second, first]);

    let filtered: Vec<RouteRow> = persistence.list_routes("kaol").unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].label(), "Dakar → Kaolack");
}

#[test]
fn test_route_list_joins_driver_and_vehicle() {
    let mut persistence: Persistence = create_test_persistence();
    let dakar: i64 = create_test_city(&mut persistence, "Dakar");
    let thies: i64 = create_test_city(&mut persistence, "Thiès");
    let driver_id: i64 = create_test_driver(&mut persistence, "Sow", "B-001");
    let vehicle_id: i64 = create_test_vehicle(&mut persistence, "DK-1234-A");
    let mut draft = create_test_route_draft(dakar, thies);
    draft.driver_id = Some(driver_id);
    draft.vehicle_id = Some(vehicle_id);
    persistence.create_route(&draft).unwrap();

    let row: RouteRow = persistence.list_routes("").unwrap().remove(0);
    assert_eq!(row.driver_name.as_deref(), Some("Sow Ibrahima"));
    assert_eq!(row.vehicle_plate.as_deref(), Some("DK-1234-A"));
    assert_eq!(row.seat_count, Some(60));

    persistence.delete_driver(driver_id).unwrap();
    let row: RouteRow = persistence.list_routes("").unwrap().remove(0);
    assert_eq!(row.driver_name, None);
}

#[test]
fn test_route_choices_latest_departure_first() {
    let mut persistence: Persistence = create_test_persistence();
    let dakar: i64 = create_test_city(&mut persistence, "Dakar");
    let thies: i64 = create_test_city(&mut persistence, "Thiès");
    let mut late = create_test_route_draft(dakar, thies);
    late.departure_time = String::from("2026-04-01 07:00");
    let early_id: i64 = persistence
        .create_route(&create_test_route_draft(thies, dakar))
        .unwrap();
    let late_id: i64 = persistence.create_route(&late).unwrap();

    let choices = persistence.route_choices().unwrap();
    assert_eq!(choices[0].id, late_id);
    assert_eq!(choices[0].label, "Dakar → Thiès (2026-04-01 07:00)");
    assert_eq!(choices[1].id, early_id);
}

#[test]
fn test_cities_sorted_by_name() {
    let mut persistence: Persistence = create_test_persistence();
    create_test_city(&mut persistence, "Thiès");
    create_test_city(&mut persistence, "Dakar");

    let names: Vec<String> = persistence
        .city_choices()
        .unwrap()
        .into_iter()
        .map(|choice| choice.label)
        .collect();
    assert_eq!(names, vec!["Dakar", "Thiès"]);
}
