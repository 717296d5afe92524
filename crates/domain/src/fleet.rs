// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vehicles and drivers.

use serde::{Deserialize, Serialize};

use crate::display::full_name;
use crate::entity::Entity;
use crate::error::DomainError;
use crate::validation::{FormMode, Validate, optional, optional_date, required, validate_seat};

/// Values offered by the vehicle type field. Any other text is accepted.
pub const VEHICLE_TYPE_SUGGESTIONS: [&str; 5] = ["Bus", "Minibus", "Coach", "Van", "Other"];

/// A vehicle of the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    /// Registration plate, unique across the fleet.
    pub plate: String,
    pub seat_count: i32,
    pub vehicle_type: Option<String>,
    pub company_id: Option<i64>,
}

/// A vehicle as shown in the vehicle list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRow {
    pub id: i64,
    pub plate: String,
    pub seat_count: i32,
    pub vehicle_type: Option<String>,
    /// `None` when the vehicle has no company or the company was deleted.
    pub company_name: Option<String>,
}

/// Form fields for a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDraft {
    pub plate: String,
    pub seat_count: i32,
    pub vehicle_type: String,
    pub company_id: Option<i64>,
}

impl Default for VehicleDraft {
    fn default() -> Self {
        Self {
            plate: String::new(),
            seat_count: 1,
            vehicle_type: VEHICLE_TYPE_SUGGESTIONS[0].to_string(),
            company_id: None,
        }
    }
}

impl Validate for VehicleDraft {
    fn validated(&self, _mode: FormMode) -> Result<Self, DomainError> {
        Ok(Self {
            plate: required("plate", &self.plate)?,
            seat_count: validate_seat(self.seat_count)?,
            vehicle_type: optional(&self.vehicle_type),
            company_id: self.company_id,
        })
    }
}

impl Entity for Vehicle {
    const LABEL: &'static str = "vehicle";
    type Row = VehicleRow;
    type Draft = VehicleDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> VehicleDraft {
        VehicleDraft {
            plate: self.plate.clone(),
            seat_count: self.seat_count,
            vehicle_type: self.vehicle_type.clone().unwrap_or_default(),
            company_id: self.company_id,
        }
    }
}

/// A driver employed by a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    /// Staff badge number, unique when present.
    pub badge: Option<String>,
    pub license_number: Option<String>,
    /// `YYYY-MM-DD`.
    pub hire_date: Option<String>,
    pub company_id: Option<i64>,
}

impl Driver {
    /// Returns `last first`.
    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(&self.last_name, &self.first_name)
    }
}

/// A driver as shown in the driver list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRow {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub badge: Option<String>,
    pub license_number: Option<String>,
    pub hire_date: Option<String>,
    pub company_name: Option<String>,
}

/// Form fields for a driver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverDraft {
    pub last_name: String,
    pub first_name: String,
    pub badge: String,
    pub license_number: String,
    pub hire_date: String,
    pub company_id: Option<i64>,
}

impl Validate for DriverDraft {
    fn validated(&self, _mode: FormMode) -> Result<Self, DomainError> {
        Ok(Self {
            last_name: required("last_name", &self.last_name)?,
            first_name: required("first_name", &self.first_name)?,
            badge: optional(&self.badge),
            license_number: optional(&self.license_number),
            hire_date: optional_date("hire_date", &self.hire_date)?,
            company_id: self.company_id,
        })
    }
}

impl Entity for Driver {
    const LABEL: &'static str = "driver";
    type Row = DriverRow;
    type Draft = DriverDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> DriverDraft {
        DriverDraft {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            badge: self.badge.clone().unwrap_or_default(),
            license_number: self.license_number.clone().unwrap_or_default(),
            hire_date: self.hire_date.clone().unwrap_or_default(),
            company_id: self.company_id,
        }
    }
}
