// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use gesttransport_domain::{ClientDraft, RouteDraft};
use gesttransport_persistence::{DEFAULT_ADMIN_LOGIN, DEFAULT_ADMIN_PASSWORD, Persistence};

use crate::{AuthenticationService, Session};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

/// Logs in with the seeded administrator account.
pub fn create_test_admin_session(persistence: &mut Persistence) -> Session {
    AuthenticationService::login(persistence, DEFAULT_ADMIN_LOGIN, DEFAULT_ADMIN_PASSWORD).unwrap()
}

/// A session for an operator id that is not the seeded admin.
pub fn create_test_agent_session() -> Session {
    Session {
        user_id: 99,
        login: String::from("agent"),
        last_name: String::from("Sow"),
        first_name: String::from("Moussa"),
        role: Some(String::from("Agent")),
        company: None,
    }
}

pub fn create_test_client(persistence: &mut Persistence, last_name: &str, first_name: &str) -> i64 {
    persistence
        .create_client(&ClientDraft::new(last_name, first_name, "77 123 45 67"))
        .unwrap()
}

/// Creates both cities and a route between them departing at `departure`.
pub fn create_test_route(
    persistence: &mut Persistence,
    departure_city: &str,
    arrival_city: &str,
    departure: &str,
    price: f64,
) -> i64 {
    let departure_city_id: i64 = city_id(persistence, departure_city);
    let arrival_city_id: i64 = city_id(persistence, arrival_city);
    persistence
        .create_route(&RouteDraft {
            departure_city_id: Some(departure_city_id),
            arrival_city_id: Some(arrival_city_id),
            departure_time: departure.to_string(),
            arrival_time: departure.to_string(),
            driver_id: None,
            vehicle_id: None,
            price,
        })
        .unwrap()
}

fn city_id(persistence: &mut Persistence, name: &str) -> i64 {
    match persistence.find_city_by_name(name).unwrap() {
        Some(city) => city.id,
        None => persistence.create_city(name).unwrap(),
    }
}

/// A confirmation that always answers `answer` and counts prompts.
pub struct ScriptedConfirmation {
    pub answer: bool,
    pub prompts: Vec<String>,
}

impl ScriptedConfirmation {
    pub const fn accepting() -> Self {
        Self {
            answer: true,
            prompts: Vec::new(),
        }
    }

    pub const fn declining() -> Self {
        Self {
            answer: false,
            prompts: Vec::new(),
        }
    }
}

impl crate::Confirmation for ScriptedConfirmation {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answer
    }
}
