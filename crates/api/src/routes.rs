// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Route scheduling with inline city creation.

use gesttransport_domain::{Choice, City, Route, RouteRow};
use gesttransport_persistence::Persistence;
use tracing::info;

use crate::auth::Session;
use crate::crud::{Confirmation, CrudModule, Decision, Form};
use crate::error::{ApiError, translate_persistence_error};

/// Label of the empty entry offered by optional selectors.
pub const NONE_LABEL: &str = "— None —";

/// Builds selector entries for an optional reference, led by `NONE_LABEL`.
#[must_use]
pub fn with_none(choices: &[Choice]) -> Vec<(Option<i64>, String)> {
    std::iter::once((None, NONE_LABEL.to_string()))
        .chain(
            choices
                .iter()
                .map(|choice| (Some(choice.id), choice.label.clone())),
        )
        .collect()
}

/// Which city selector triggered an inline city creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitySlot {
    Departure,
    Arrival,
}

/// Selector contents for the route form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteFormOptions {
    pub cities: Vec<Choice>,
    pub drivers: Vec<Choice>,
    pub vehicles: Vec<Choice>,
}

impl RouteFormOptions {
    /// Loads every selector from the database.
    ///
    /// # Errors
    ///
    /// Returns an error if a lookup query fails.
    pub fn load(persistence: &mut Persistence) -> Result<Self, ApiError> {
        Ok(Self {
            cities: persistence
                .city_choices()
                .map_err(translate_persistence_error)?,
            drivers: persistence
                .driver_choices()
                .map_err(translate_persistence_error)?,
            vehicles: persistence
                .vehicle_choices()
                .map_err(translate_persistence_error)?,
        })
    }

    /// Driver entries, with the empty entry first.
    #[must_use]
    pub fn driver_entries(&self) -> Vec<(Option<i64>, String)> {
        with_none(&self.drivers)
    }

    /// Vehicle entries, with the empty entry first.
    #[must_use]
    pub fn vehicle_entries(&self) -> Vec<(Option<i64>, String)> {
        with_none(&self.vehicles)
    }
}

/// An open route form with its selectors.
#[derive(Debug, Clone)]
pub struct RouteForm {
    pub form: Form<Route>,
    pub options: RouteFormOptions,
}

impl RouteForm {
    /// Creates a city from the text typed into a city selector and selects
    /// it in that selector.
    ///
    /// The name is trimmed. A blank name does nothing. A name that already
    /// exists reuses the stored city. Either way the city list is reloaded
    /// and the other selector keeps its value.
    ///
    /// # Returns
    ///
    /// The selected city id, or `None` when the name was blank.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup or insert fails.
    pub fn add_city(
        &mut self,
        persistence: &mut Persistence,
        slot: CitySlot,
        name: &str,
    ) -> Result<Option<i64>, ApiError> {
        let name: &str = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let existing: Option<City> = persistence
            .find_city_by_name(name)
            .map_err(translate_persistence_error)?;
        let city_id: i64 = match existing {
            Some(city) => city.id,
            None => {
                let id: i64 = persistence
                    .create_city(name)
                    .map_err(translate_persistence_error)?;
                info!(city_id = id, name, "Added city");
                id
            }
        };

        self.options.cities = persistence
            .city_choices()
            .map_err(translate_persistence_error)?;
        match slot {
            CitySlot::Departure => self.form.draft.departure_city_id = Some(city_id),
            CitySlot::Arrival => self.form.draft.arrival_city_id = Some(city_id),
        }
        Ok(Some(city_id))
    }
}

/// The route module: list, search, form and delete.
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    routes: CrudModule<Route>,
}

impl RouteCatalog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            routes: CrudModule::new(),
        }
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        self.routes.filter()
    }

    /// Rows ordered latest first.
    #[must_use]
    pub fn rows(&self) -> &[RouteRow] {
        self.routes.rows()
    }

    /// Reloads the list with the current filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn refresh(&mut self, persistence: &mut Persistence) -> Result<&[RouteRow], ApiError> {
        self.routes.refresh(persistence)
    }

    /// Filters by departure or arrival city name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn search(
        &mut self,
        persistence: &mut Persistence,
        filter: &str,
    ) -> Result<&[RouteRow], ApiError> {
        self.routes.search(persistence, filter)
    }

    /// Opens a route form with freshly loaded selectors.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if `id` names a missing route.
    pub fn open_form(
        persistence: &mut Persistence,
        id: Option<i64>,
    ) -> Result<RouteForm, ApiError> {
        let form: Form<Route> = CrudModule::<Route>::open_form(persistence, id)?;
        let options: RouteFormOptions = RouteFormOptions::load(persistence)?;
        Ok(RouteForm { form, options })
    }

    /// Validates and saves a route form.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for a missing city or malformed time,
    /// or `ApiError::Persistence` if the write fails.
    pub fn save(
        &mut self,
        persistence: &mut Persistence,
        route_form: &RouteForm,
    ) -> Result<i64, ApiError> {
        self.routes.save(persistence, &route_form.form)
    }

    /// Deletes a route after confirmation.
    ///
    /// Tickets sold on the route are kept and render their route as `—`.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete<C: Confirmation>(
        &mut self,
        persistence: &mut Persistence,
        id: i64,
        session: &Session,
        confirmation: &mut C,
    ) -> Result<Decision, ApiError> {
        self.routes.delete(persistence, id, session, confirmation)
    }
}
