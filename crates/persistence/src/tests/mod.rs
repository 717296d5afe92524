// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod entity_tests;
mod initialization_tests;
mod overview_tests;

use gesttransport_domain::{ClientDraft, DriverDraft, RouteDraft, VehicleDraft};

use crate::{NewTicket, Persistence};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should open")
}

pub fn create_test_city(persistence: &mut Persistence, name: &str) -> i64 {
    persistence.create_city(name).unwrap()
}

pub fn create_test_client(persistence: &mut Persistence, last_name: &str, first_name: &str) -> i64 {
    persistence
        .create_client(&ClientDraft::new(last_name, first_name, ""))
        .unwrap()
}

pub fn create_test_vehicle(persistence: &mut Persistence, plate: &str) -> i64 {
    persistence
        .create_vehicle(&VehicleDraft {
            plate: plate.to_string(),
            seat_count: 60,
            ..VehicleDraft::default()
        })
        .unwrap()
}

pub fn create_test_driver(persistence: &mut Persistence, last_name: &str, badge: &str) -> i64 {
    persistence
        .create_driver(&DriverDraft {
            last_name: last_name.to_string(),
            first_name: String::from("Ibrahima"),
            badge: badge.to_string(),
            ..DriverDraft::default()
        })
        .unwrap()
}

pub fn create_test_route_draft(departure_city_id: i64, arrival_city_id: i64) -> RouteDraft {
    RouteDraft {
        departure_city_id: Some(departure_city_id),
        arrival_city_id: Some(arrival_city_id),
        departure_time: String::from("2026-03-01 08:00"),
        arrival_time: String::from("2026-03-01 10:30"),
        driver_id: None,
        vehicle_id: None,
        price: 2000.0,
    }
}

/// Creates Dakar and Thiès and a route between them.
pub fn create_test_route(persistence: &mut Persistence) -> i64 {
    let dakar: i64 = create_test_city(persistence, "Dakar");
    let thies: i64 = create_test_city(persistence, "Thiès");
    persistence
        .create_route(&create_test_route_draft(dakar, thies))
        .unwrap()
}

pub fn create_test_ticket(
    persistence: &mut Persistence,
    route_id: i64,
    client_id: i64,
    seat: i32,
) -> i64 {
    persistence
        .create_ticket(&NewTicket {
            route_id,
            client_id,
            seat,
            amount: 2000.0,
            user_id: 1,
            sold_at: "2026-02-20 09:15",
        })
        .unwrap()
}
