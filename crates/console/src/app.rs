// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The login prompt and the command loop of an open session.

use std::io::Write;

use gesttransport_api::{
    ApiError, AuthenticationService, Confirmation, CrudModule, Decision, Form, ModuleKey,
    Repository, RouteCatalog, RouteForm, SaleForm, SalesPolicy, Session, Shell, TicketDesk,
    translate_persistence_error,
};
use gesttransport_domain::{Choice, Entity, StatusFilter, ticket_number};
use gesttransport_persistence::{DEFAULT_ADMIN_LOGIN, DEFAULT_ADMIN_PASSWORD, Persistence};
use tracing::debug;

use crate::command::{Command, HELP};
use crate::console::Console;
use crate::error::ConsoleError;
use crate::forms;
use crate::input::Input;
use crate::render;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Logout,
    Quit,
}

pub struct App<I, W> {
    persistence: Persistence,
    policy: SalesPolicy,
    console: Console<I, W>,
}

impl<I: Input, W: Write> App<I, W> {
    pub const fn new(persistence: Persistence, policy: SalesPolicy, console: Console<I, W>) -> Self {
        Self {
            persistence,
            policy,
            console,
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (Persistence, Console<I, W>) {
        (self.persistence, self.console)
    }

    /// Alternates between the login prompt and a session until the operator
    /// quits or the input closes.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails or a session cannot start.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            let Some(session) = self.login()? else {
                return Ok(());
            };
            let mut shell: Shell = Shell::start(&mut self.persistence, session, self.policy)?;
            self.show(&shell)?;
            let exit: Exit = self.session_loop(&mut shell)?;
            shell.logout();
            if exit == Exit::Quit {
                return Ok(());
            }
        }
    }

    fn login(&mut self) -> Result<Option<Session>, ConsoleError> {
        self.console.say("GestTransport")?;
        self.console.say(&format!(
            "Default account: {DEFAULT_ADMIN_LOGIN} / {DEFAULT_ADMIN_PASSWORD}"
        ))?;
        loop {
            let (login, password) = match self.credentials() {
                Ok(credentials) => credentials,
                Err(ConsoleError::Interrupted) => return Ok(None),
                Err(err) => return Err(err),
            };
            if login.is_empty() || password.is_empty() {
                self.console.say("Please fill in all fields.")?;
                continue;
            }
            match AuthenticationService::login(&mut self.persistence, &login, &password) {
                Ok(session) => {
                    self.console
                        .say(&format!("Logged in as {}.", session.display_name()))?;
                    return Ok(Some(session));
                }
                Err(err @ ApiError::AuthenticationFailed) => self.console.say(&err)?,
                Err(err) => self.console.warn(&err)?,
            }
        }
    }

    fn credentials(&mut self) -> Result<(String, String), ConsoleError> {
        let login: String = self.console.ask("Login", "")?;
        let password: String = self.console.ask("Password", "")?;
        Ok((login.trim().to_string(), password))
    }

    fn session_loop(&mut self, shell: &mut Shell) -> Result<Exit, ConsoleError> {
        loop {
            let prompt: String = format!("{}@{}> ", shell.session().login, shell.active());
            let line: String = match self.console.read_command(&prompt) {
                Ok(line) => line,
                Err(ConsoleError::Interrupted) => return Ok(Exit::Quit),
                Err(err) => return Err(err),
            };
            if line.trim().is_empty() {
                continue;
            }
            let command: Command = match line.parse() {
                Ok(command) => command,
                Err(message) => {
                    self.console.warn(&message)?;
                    continue;
                }
            };
            debug!(?command, "Running command");

            match command {
                Command::Logout => return Ok(Exit::Logout),
                Command::Quit => return Ok(Exit::Quit),
                Command::Help => self.console.say(HELP)?,
                other => match self.execute(shell, other) {
                    Ok(()) => {}
                    Err(ConsoleError::Api(err)) => self.console.warn(&err)?,
                    Err(ConsoleError::Interrupted) => self.console.say("Form closed.")?,
                    Err(err) => return Err(err),
                },
            }
        }
    }

    fn execute(&mut self, shell: &mut Shell, command: Command) -> Result<(), ConsoleError> {
        let session: Session = shell.session().clone();
        match command {
            Command::Go(key) => shell.switch_to(&mut self.persistence, key)?,
            Command::List => self.refresh(shell)?,
            Command::Search(filter) => self.search(shell, &filter)?,
            Command::New => self.open_form(shell, None)?,
            Command::Edit(id) => self.open_form(shell, Some(id))?,
            Command::Delete(id) => self.delete(shell, id, &session)?,
            Command::Cancel(id) => {
                let decision: Decision =
                    shell
                        .tickets
                        .cancel(&mut self.persistence, id, &mut self.console)?;
                if decision == Decision::Confirmed {
                    self.console
                        .say(&format!("Ticket {} cancelled.", ticket_number(id)))?;
                }
            }
            Command::Receipt { ticket_id, html } => {
                if let Some(receipt) = TicketDesk::receipt(&mut self.persistence, ticket_id)? {
                    let rendered: String = if html {
                        receipt.to_html()
                    } else {
                        receipt.to_text()
                    };
                    write!(self.console.out(), "{rendered}")?;
                }
                return Ok(());
            }
            Command::Status(status) => {
                shell.tickets.set_status_filter(&mut self.persistence, status)?;
            }
            Command::Help | Command::Logout | Command::Quit => return Ok(()),
        }
        self.show(shell)
    }

    fn refresh(&mut self, shell: &mut Shell) -> Result<(), ApiError> {
        let persistence: &mut Persistence = &mut self.persistence;
        match shell.active() {
            ModuleKey::Overview => shell.switch_to(persistence, ModuleKey::Overview),
            ModuleKey::Tickets => shell.tickets.refresh(persistence).map(drop),
            ModuleKey::Routes => shell.routes.refresh(persistence).map(drop),
            ModuleKey::Clients => shell.clients.refresh(persistence).map(drop),
            ModuleKey::Drivers => shell.drivers.refresh(persistence).map(drop),
            ModuleKey::Vehicles => shell.vehicles.refresh(persistence).map(drop),
            ModuleKey::Companies => shell.companies.refresh(persistence).map(drop),
            ModuleKey::Users => shell.users.refresh(persistence).map(drop),
        }
    }

    fn search(&mut self, shell: &mut Shell, filter: &str) -> Result<(), ApiError> {
        let persistence: &mut Persistence = &mut self.persistence;
        match shell.active() {
            ModuleKey::Overview => Ok(()),
            ModuleKey::Tickets => shell.tickets.search(persistence, filter).map(drop),
            ModuleKey::Routes => shell.routes.search(persistence, filter).map(drop),
            ModuleKey::Clients => shell.clients.search(persistence, filter).map(drop),
            ModuleKey::Drivers => shell.drivers.search(persistence, filter).map(drop),
            ModuleKey::Vehicles => shell.vehicles.search(persistence, filter).map(drop),
            ModuleKey::Companies => shell.companies.search(persistence, filter).map(drop),
            ModuleKey::Users => shell.users.search(persistence, filter).map(drop),
        }
    }

    fn open_form(&mut self, shell: &mut Shell, id: Option<i64>) -> Result<(), ConsoleError> {
        match shell.active() {
            ModuleKey::Overview => self.console.say("Switch to a module first.")?,
            ModuleKey::Tickets => match id {
                None => self.sell(shell)?,
                Some(_) => self
                    .console
                    .say("Tickets cannot be edited; cancel them instead.")?,
            },
            ModuleKey::Routes => self.route_form(shell, id)?,
            ModuleKey::Clients => {
                self.entity_form(&mut shell.clients, id, |console, form| {
                    forms::fill_client(console, &mut form.draft)
                })?;
            }
            ModuleKey::Drivers => {
                let companies: Vec<Choice> = self.company_choices()?;
                self.entity_form(&mut shell.drivers, id, |console, form| {
                    forms::fill_driver(console, &mut form.draft, &companies)
                })?;
            }
            ModuleKey::Vehicles => {
                let companies: Vec<Choice> = self.company_choices()?;
                self.entity_form(&mut shell.vehicles, id, |console, form| {
                    forms::fill_vehicle(console, &mut form.draft, &companies)
                })?;
            }
            ModuleKey::Companies => {
                self.entity_form(&mut shell.companies, id, |console, form| {
                    forms::fill_company(console, &mut form.draft)
                })?;
            }
            ModuleKey::Users => {
                let roles: Vec<Choice> = self
                    .persistence
                    .role_choices()
                    .map_err(translate_persistence_error)?;
                let companies: Vec<Choice> = self.company_choices()?;
                self.entity_form(&mut shell.users, id, |console, form| {
                    let mode = form.mode();
                    forms::fill_user(console, &mut form.draft, mode, &roles, &companies)
                })?;
            }
        }
        Ok(())
    }

    fn company_choices(&mut self) -> Result<Vec<Choice>, ApiError> {
        self.persistence
            .company_choices()
            .map_err(translate_persistence_error)
    }

    /// Fills and saves a form until it saves or the operator gives up.
    fn entity_form<E, F>(
        &mut self,
        module: &mut CrudModule<E>,
        id: Option<i64>,
        mut fill: F,
    ) -> Result<(), ConsoleError>
    where
        E: Entity,
        Persistence: Repository<E>,
        F: FnMut(&mut Console<I, W>, &mut Form<E>) -> Result<(), ConsoleError>,
    {
        let mut form: Form<E> = CrudModule::<E>::open_form(&mut self.persistence, id)?;
        loop {
            fill(&mut self.console, &mut form)?;
            match module.save(&mut self.persistence, &form) {
                Ok(saved) => {
                    return self.console.say(&format!("Saved {} {saved}.", E::LABEL));
                }
                Err(err) => {
                    self.console.warn(&err)?;
                    if !self.console.confirm("Edit the form again?") {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn route_form(&mut self, shell: &mut Shell, id: Option<i64>) -> Result<(), ConsoleError> {
        let mut route_form: RouteForm = RouteCatalog::open_form(&mut self.persistence, id)?;
        loop {
            forms::fill_route(&mut self.console, &mut self.persistence, &mut route_form)?;
            match shell.routes.save(&mut self.persistence, &route_form) {
                Ok(saved) => return self.console.say(&format!("Saved route {saved}.")),
                Err(err) => {
                    self.console.warn(&err)?;
                    if !self.console.confirm("Edit the form again?") {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn sell(&mut self, shell: &mut Shell) -> Result<(), ConsoleError> {
        let session: Session = shell.session().clone();
        let mut sale: SaleForm = TicketDesk::open_sale_form(&mut self.persistence)?;
        loop {
            forms::fill_sale(&mut self.console, &mut self.persistence, &mut sale)?;
            match shell.tickets.save(&mut self.persistence, &session, &sale) {
                Ok(ticket_id) => {
                    return self
                        .console
                        .say(&format!("Sold ticket {}.", ticket_number(ticket_id)));
                }
                Err(err) => {
                    self.console.warn(&err)?;
                    if !self.console.confirm("Edit the form again?") {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn delete(&mut self, shell: &mut Shell, id: i64, session: &Session) -> Result<(), ConsoleError> {
        let persistence: &mut Persistence = &mut self.persistence;
        let console: &mut Console<I, W> = &mut self.console;
        let decision: Decision = match shell.active() {
            ModuleKey::Overview => {
                return console.say("Switch to a module first.");
            }
            ModuleKey::Tickets => {
                return console.say("Tickets are cancelled, not deleted. Use cancel <id>.");
            }
            ModuleKey::Routes => shell.routes.delete(persistence, id, session, console)?,
            ModuleKey::Clients => shell.clients.delete(persistence, id, session, console)?,
            ModuleKey::Drivers => shell.drivers.delete(persistence, id, session, console)?,
            ModuleKey::Vehicles => shell.vehicles.delete(persistence, id, session, console)?,
            ModuleKey::Companies => shell.companies.delete(persistence, id, session, console)?,
            ModuleKey::Users => shell.users.delete(persistence, id, session, console)?,
        };
        match decision {
            Decision::Confirmed => console.say("Deleted."),
            Decision::Cancelled => console.say("Nothing deleted."),
        }
    }

    fn show(&mut self, shell: &Shell) -> Result<(), ConsoleError> {
        let key: ModuleKey = shell.active();
        let body: String = match key {
            ModuleKey::Overview => render::overview(shell.overview()),
            ModuleKey::Tickets => {
                let status: &str = match shell.tickets.status_filter() {
                    StatusFilter::All => "all",
                    StatusFilter::Only(status) => status.as_str(),
                };
                format!(
                    "Status: {status}\n{}",
                    render::tickets(shell.tickets.rows())
                )
            }
            ModuleKey::Routes => render::routes(shell.routes.rows()).to_string(),
            ModuleKey::Clients => render::clients(shell.clients.rows()).to_string(),
            ModuleKey::Drivers => render::drivers(shell.drivers.rows()).to_string(),
            ModuleKey::Vehicles => render::vehicles(shell.vehicles.rows()).to_string(),
            ModuleKey::Companies => render::companies(shell.companies.rows()).to_string(),
            ModuleKey::Users => render::users(shell.users.rows()).to_string(),
        };
        let filter: &str = match key {
            ModuleKey::Overview => "",
            ModuleKey::Tickets => shell.tickets.filter(),
            ModuleKey::Routes => shell.routes.filter(),
            ModuleKey::Clients => shell.clients.filter(),
            ModuleKey::Drivers => shell.drivers.filter(),
            ModuleKey::Vehicles => shell.vehicles.filter(),
            ModuleKey::Companies => shell.companies.filter(),
            ModuleKey::Users => shell.users.filter(),
        };
        if filter.is_empty() {
            self.console.say(&format!("== {key} =="))?;
        } else {
            self.console.say(&format!("== {key} (filter: {filter}) =="))?;
        }
        write!(self.console.out(), "{body}")?;
        Ok(())
    }
}
