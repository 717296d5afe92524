// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cities and scheduled routes between them.

use serde::{Deserialize, Serialize};

use crate::display::route_label;
use crate::entity::Entity;
use crate::error::DomainError;
use crate::schedule::ScheduleTime;
use crate::validation::{FormMode, Validate, required_choice, validate_amount};

/// A named stop. City names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
}

/// A scheduled trip between two cities.
///
/// References are optional because deleting a city, driver or vehicle
/// leaves the route in place with a dangling reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: i64,
    pub departure_city_id: Option<i64>,
    pub arrival_city_id: Option<i64>,
    /// `YYYY-MM-DD HH:MM`.
    pub departure_time: String,
    /// `YYYY-MM-DD HH:MM`.
    pub arrival_time: String,
    pub vehicle_id: Option<i64>,
    pub driver_id: Option<i64>,
    /// Default amount proposed for tickets sold on this route.
    pub price: f64,
}

/// A route joined with its city, driver and vehicle names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRow {
    pub id: i64,
    pub departure_city: Option<String>,
    pub arrival_city: Option<String>,
    pub departure_time: String,
    pub arrival_time: String,
    pub driver_name: Option<String>,
    pub vehicle_plate: Option<String>,
    pub price: f64,
    pub seat_count: Option<i32>,
}

impl RouteRow {
    /// Returns `Departure → Arrival`.
    #[must_use]
    pub fn label(&self) -> String {
        route_label(self.departure_city.as_deref(), self.arrival_city.as_deref())
    }
}

/// Form fields for a route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteDraft {
    pub departure_city_id: Option<i64>,
    pub arrival_city_id: Option<i64>,
    pub departure_time: String,
    pub arrival_time: String,
    pub driver_id: Option<i64>,
    pub vehicle_id: Option<i64>,
    pub price: f64,
}

impl Validate for RouteDraft {
    /// Arrival before departure, identical city pairs and double-booked
    /// drivers or vehicles are all accepted.
    fn validated(&self, _mode: FormMode) -> Result<Self, DomainError> {
        let departure_city_id: i64 =
            required_choice("departure_city", self.departure_city_id)?;
        let arrival_city_id: i64 = required_choice("arrival_city", self.arrival_city_id)?;
        let departure: ScheduleTime = ScheduleTime::parse("departure_time", &self.departure_time)?;
        let arrival: ScheduleTime = ScheduleTime::parse("arrival_time", &self.arrival_time)?;
        Ok(Self {
            departure_city_id: Some(departure_city_id),
            arrival_city_id: Some(arrival_city_id),
            departure_time: departure.to_storage(),
            arrival_time: arrival.to_storage(),
            driver_id: self.driver_id,
            vehicle_id: self.vehicle_id,
            price: validate_amount("price", self.price)?,
        })
    }
}

impl Entity for Route {
    const LABEL: &'static str = "route";
    type Row = RouteRow;
    type Draft = RouteDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> RouteDraft {
        RouteDraft {
            departure_city_id: self.departure_city_id,
            arrival_city_id: self.arrival_city_id,
            departure_time: self.departure_time.clone(),
            arrival_time: self.arrival_time.clone(),
            driver_id: self.driver_id,
            vehicle_id: self.vehicle_id,
            price: self.price,
        }
    }
}
