// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-by-field form entry.
//!
//! Every prompt is pre-filled with the draft's current value, so a form that
//! failed to save can be walked again without retyping.

use std::io::Write;

use gesttransport_api::{CitySlot, RouteForm, SaleForm, with_none};
use gesttransport_domain::{
    Choice, ClientDraft, CompanyDraft, DriverDraft, FormMode, Gender, UserDraft,
    VEHICLE_TYPE_SUGGESTIONS, VehicleDraft,
};
use gesttransport_persistence::Persistence;

use crate::console::{Console, Pick};
use crate::error::ConsoleError;
use crate::input::Input;

fn required_entries(choices: &[Choice]) -> Vec<(Option<i64>, String)> {
    choices
        .iter()
        .map(|choice| (Some(choice.id), choice.label.clone()))
        .collect()
}

/// Asks for an optional reference; `+Name` is not offered.
fn pick_optional<I: Input, W: Write>(
    console: &mut Console<I, W>,
    label: &str,
    choices: &[Choice],
    current: Option<i64>,
) -> Result<Option<i64>, ConsoleError> {
    match console.ask_choice(label, &with_none(choices), current, false)? {
        Pick::Entry(id) => Ok(id),
        Pick::New(_) => Ok(current),
    }
}

pub fn fill_company<I: Input, W: Write>(
    console: &mut Console<I, W>,
    draft: &mut CompanyDraft,
) -> Result<(), ConsoleError> {
    draft.name = console.ask("Name", &draft.name)?;
    draft.description = console.ask("Description", &draft.description)?;
    draft.phone = console.ask("Phone", &draft.phone)?;
    draft.address = console.ask("Address", &draft.address)?;
    Ok(())
}

pub fn fill_vehicle<I: Input, W: Write>(
    console: &mut Console<I, W>,
    draft: &mut VehicleDraft,
    companies: &[Choice],
) -> Result<(), ConsoleError> {
    draft.plate = console.ask("Plate", &draft.plate)?;
    draft.seat_count = console.ask_parsed("Seats", &draft.seat_count)?;
    let type_label: String = format!("Type ({})", VEHICLE_TYPE_SUGGESTIONS.join("/"));
    draft.vehicle_type = console.ask(&type_label, &draft.vehicle_type)?;
    draft.company_id = pick_optional(console, "Company", companies, draft.company_id)?;
    Ok(())
}

pub fn fill_driver<I: Input, W: Write>(
    console: &mut Console<I, W>,
    draft: &mut DriverDraft,
    companies: &[Choice],
) -> Result<(), ConsoleError> {
    draft.last_name = console.ask("Last name", &draft.last_name)?;
    draft.first_name = console.ask("First name", &draft.first_name)?;
    draft.badge = console.ask("Badge", &draft.badge)?;
    draft.license_number = console.ask("License number", &draft.license_number)?;
    draft.hire_date = console.ask("Hire date (YYYY-MM-DD)", &draft.hire_date)?;
    draft.company_id = pick_optional(console, "Company", companies, draft.company_id)?;
    Ok(())
}

pub fn fill_client<I: Input, W: Write>(
    console: &mut Console<I, W>,
    draft: &mut ClientDraft,
) -> Result<(), ConsoleError> {
    draft.last_name = console.ask("Last name", &draft.last_name)?;
    draft.first_name = console.ask("First name", &draft.first_name)?;
    draft.phone = console.ask("Phone", &draft.phone)?;
    Ok(())
}

pub fn fill_user<I: Input, W: Write>(
    console: &mut Console<I, W>,
    draft: &mut UserDraft,
    mode: FormMode,
    roles: &[Choice],
    companies: &[Choice],
) -> Result<(), ConsoleError> {
    draft.last_name = console.ask("Last name", &draft.last_name)?;
    draft.first_name = console.ask("First name", &draft.first_name)?;
    draft.phone = console.ask("Phone", &draft.phone)?;
    draft.birth_date = console.ask("Birth date (YYYY-MM-DD)", &draft.birth_date)?;
    draft.gender = console.ask_parsed::<Gender>("Gender (M/F)", &draft.gender)?;
    draft.login = console.ask("Login", &draft.login)?;
    let password_label: &str = match mode {
        FormMode::Create => "Password",
        FormMode::Edit(_) => "New password (blank keeps the current one)",
    };
    draft.password = console.ask(password_label, &draft.password)?;
    draft.role_id = pick_optional(console, "Role", roles, draft.role_id)?;
    draft.company_id = pick_optional(console, "Company", companies, draft.company_id)?;
    Ok(())
}

fn pick_city<I: Input, W: Write>(
    console: &mut Console<I, W>,
    persistence: &mut Persistence,
    route_form: &mut RouteForm,
    slot: CitySlot,
) -> Result<(), ConsoleError> {
    let label: &str = match slot {
        CitySlot::Departure => "Departure city",
        CitySlot::Arrival => "Arrival city",
    };
    loop {
        let current: Option<i64> = match slot {
            CitySlot::Departure => route_form.form.draft.departure_city_id,
            CitySlot::Arrival => route_form.form.draft.arrival_city_id,
        };
        let entries: Vec<(Option<i64>, String)> = required_entries(&route_form.options.cities);
        match console.ask_choice(label, &entries, current, true)? {
            Pick::Entry(id) => {
                match slot {
                    CitySlot::Departure => route_form.form.draft.departure_city_id = id,
                    CitySlot::Arrival => route_form.form.draft.arrival_city_id = id,
                }
                return Ok(());
            }
            Pick::New(name) => match route_form.add_city(persistence, slot, &name) {
                Ok(Some(_)) => return Ok(()),
                Ok(None) => {}
                Err(err) => console.warn(&err)?,
            },
        }
    }
}

pub fn fill_route<I: Input, W: Write>(
    console: &mut Console<I, W>,
    persistence: &mut Persistence,
    route_form: &mut RouteForm,
) -> Result<(), ConsoleError> {
    pick_city(console, persistence, route_form, CitySlot::Departure)?;
    pick_city(console, persistence, route_form, CitySlot::Arrival)?;

    let draft = &mut route_form.form.draft;
    draft.departure_time = console.ask("Departure (YYYY-MM-DD HH:MM)", &draft.departure_time)?;
    draft.arrival_time = console.ask("Arrival (YYYY-MM-DD HH:MM)", &draft.arrival_time)?;
    draft.driver_id = pick_optional(
        console,
        "Driver",
        &route_form.options.drivers,
        draft.driver_id,
    )?;
    draft.vehicle_id = pick_optional(
        console,
        "Vehicle",
        &route_form.options.vehicles,
        draft.vehicle_id,
    )?;
    draft.price = console.ask_parsed("Price", &draft.price)?;
    Ok(())
}

fn pick_client<I: Input, W: Write>(
    console: &mut Console<I, W>,
    persistence: &mut Persistence,
    sale: &mut SaleForm,
) -> Result<(), ConsoleError> {
    loop {
        let entries: Vec<(Option<i64>, String)> = required_entries(&sale.clients);
        match console.ask_choice("Client", &entries, sale.draft.client_id, true)? {
            Pick::Entry(id) => {
                sale.draft.client_id = id;
                return Ok(());
            }
            Pick::New(last_name) => {
                let mut client: ClientDraft = ClientDraft {
                    last_name,
                    ..ClientDraft::default()
                };
                fill_client(console, &mut client)?;
                match sale.quick_add_client(persistence, &client) {
                    Ok(_) => return Ok(()),
                    Err(err) => console.warn(&err)?,
                }
            }
        }
    }
}

pub fn fill_sale<I: Input, W: Write>(
    console: &mut Console<I, W>,
    persistence: &mut Persistence,
    sale: &mut SaleForm,
) -> Result<(), ConsoleError> {
    pick_client(console, persistence, sale)?;

    let entries: Vec<(Option<i64>, String)> = required_entries(&sale.routes);
    let pick: Pick = console.ask_choice("Route", &entries, sale.draft.route_id, false)?;
    if let Pick::Entry(route_id) = pick {
        match route_id {
            Some(route_id) if Some(route_id) != sale.draft.route_id => {
                if let Err(err) = sale.select_route(persistence, route_id) {
                    console.warn(&err)?;
                }
            }
            Some(_) => {}
            None => sale.draft.route_id = None,
        }
    }

    sale.draft.seat = console.ask_parsed("Seat", &sale.draft.seat)?;
    sale.draft.amount = console.ask_parsed("Amount", &sale.draft.amount)?;
    Ok(())
}
