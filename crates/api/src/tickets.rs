// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket sales: the sale form, cancellation and receipts.

use gesttransport_domain::{
    Choice, ClientDraft, DomainError, FormMode, ReceiptData, Route, SaleDraft, ScheduleTime,
    StatusFilter, Ticket, TicketRow, Validate,
};
use gesttransport_persistence::{NewTicket, Persistence};
use tracing::{info, warn};

use crate::auth::Session;
use crate::crud::{Confirmation, Decision};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::receipt::Receipt;

/// Run-time rules applied when selling a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesPolicy {
    /// When `false`, a seat held by a paid ticket on the same route cannot
    /// be sold again. Cancelled tickets never hold a seat.
    pub allow_double_booking: bool,
}

impl Default for SalesPolicy {
    fn default() -> Self {
        Self {
            allow_double_booking: true,
        }
    }
}

/// An open sale form with its client and route selectors.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleForm {
    pub draft: SaleDraft,
    pub clients: Vec<Choice>,
    /// Latest departure first.
    pub routes: Vec<Choice>,
}

impl SaleForm {
    /// Selects a client.
    pub const fn select_client(&mut self, client_id: i64) {
        self.draft.client_id = Some(client_id);
    }

    /// Selects a route and proposes its price as the amount.
    ///
    /// The amount can be overridden afterwards; the override is what gets
    /// saved.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the route does not exist.
    pub fn select_route(
        &mut self,
        persistence: &mut Persistence,
        route_id: i64,
    ) -> Result<(), ApiError> {
        let route: Route = persistence
            .get_route(route_id)
            .map_err(translate_persistence_error)?
            .ok_or_else(|| ApiError::not_found("route", route_id))?;
        self.draft.route_id = Some(route.id);
        self.draft.amount = route.price;
        Ok(())
    }

    /// Inserts a client from the nested quick-add form and selects it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if a name is blank, or an error if the
    /// insert fails. The sale form is unchanged on failure.
    pub fn quick_add_client(
        &mut self,
        persistence: &mut Persistence,
        client: &ClientDraft,
    ) -> Result<i64, ApiError> {
        let client: ClientDraft = client
            .validated(FormMode::Create)
            .map_err(translate_domain_error)?;
        let client_id: i64 = persistence
            .create_client(&client)
            .map_err(translate_persistence_error)?;
        self.clients = persistence
            .client_choices()
            .map_err(translate_persistence_error)?;
        self.draft.client_id = Some(client_id);
        info!(client_id, "Added client from the sale form");
        Ok(client_id)
    }
}

/// The ticket module: list with status filter, sales, cancellation and receipts.
#[derive(Debug, Clone, Default)]
pub struct TicketDesk {
    filter: String,
    status: StatusFilter,
    rows: Vec<TicketRow>,
    policy: SalesPolicy,
}

impl TicketDesk {
    #[must_use]
    pub fn new(policy: SalesPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    #[must_use]
    pub const fn status_filter(&self) -> StatusFilter {
        self.status
    }

    #[must_use]
    pub const fn policy(&self) -> SalesPolicy {
        self.policy
    }

    /// Rows ordered newest first.
    #[must_use]
    pub fn rows(&self) -> &[TicketRow] {
        &self.rows
    }

    /// Reloads the list with the current filter and status.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn refresh(&mut self, persistence: &mut Persistence) -> Result<&[TicketRow], ApiError> {
        self.rows = persistence
            .list_tickets(&self.filter, self.status)
            .map_err(translate_persistence_error)?;
        Ok(&self.rows)
    }

    /// Filters by client name or city name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn search(
        &mut self,
        persistence: &mut Persistence,
        filter: &str,
    ) -> Result<&[TicketRow], ApiError> {
        self.filter = filter.to_string();
        self.refresh(persistence)
    }

    /// Restricts the list to one status, or shows all.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn set_status_filter(
        &mut self,
        persistence: &mut Persistence,
        status: StatusFilter,
    ) -> Result<&[TicketRow], ApiError> {
        self.status = status;
        self.refresh(persistence)
    }

    /// Opens a sale form.
    ///
    /// The first client and the first route are preselected, and the amount
    /// is the preselected route's price.
    ///
    /// # Errors
    ///
    /// Returns an error if a lookup query fails.
    pub fn open_sale_form(persistence: &mut Persistence) -> Result<SaleForm, ApiError> {
        let clients: Vec<Choice> = persistence
            .client_choices()
            .map_err(translate_persistence_error)?;
        let routes: Vec<Choice> = persistence
            .route_choices()
            .map_err(translate_persistence_error)?;

        let mut form: SaleForm = SaleForm {
            draft: SaleDraft {
                client_id: clients.first().map(|choice| choice.id),
                ..SaleDraft::default()
            },
            clients,
            routes,
        };
        if let Some(route_id) = form.routes.first().map(|choice| choice.id) {
            form.select_route(persistence, route_id)?;
        }
        Ok(form)
    }

    /// Sells a seat: inserts a `paid` ticket stamped with the current local
    /// time and the operator's id, then reloads the list.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if the client or route is missing or
    /// unknown, the seat or amount is out of range, or (when double booking
    /// is forbidden) the seat is already sold. Returns
    /// `ApiError::Persistence` if the insert fails.
    pub fn save(
        &mut self,
        persistence: &mut Persistence,
        session: &Session,
        form: &SaleForm,
    ) -> Result<i64, ApiError> {
        let draft: SaleDraft = form
            .draft
            .validated(FormMode::Create)
            .map_err(translate_domain_error)?;
        let (Some(client_id), Some(route_id)) = (draft.client_id, draft.route_id) else {
            return Err(ApiError::Validation {
                field: String::from("client"),
                message: String::from("client is required"),
            });
        };

        if persistence
            .get_client(client_id)
            .map_err(translate_persistence_error)?
            .is_none()
        {
            return Err(ApiError::Validation {
                field: String::from("client"),
                message: format!("Client {client_id} does not exist"),
            });
        }
        if persistence
            .get_route(route_id)
            .map_err(translate_persistence_error)?
            .is_none()
        {
            return Err(ApiError::Validation {
                field: String::from("route"),
                message: format!("Route {route_id} does not exist"),
            });
        }

        if !self.policy.allow_double_booking {
            let held: i64 = persistence
                .count_paid_on_seat(route_id, draft.seat)
                .map_err(translate_persistence_error)?;
            if held > 0 {
                warn!(route_id, seat = draft.seat, "Refused double booking");
                return Err(translate_domain_error(DomainError::SeatAlreadySold {
                    route_id,
                    seat: draft.seat,
                }));
            }
        }

        let sold_at: String = ScheduleTime::now().to_storage();
        let ticket_id: i64 = persistence
            .create_ticket(&NewTicket {
                route_id,
                client_id,
                seat: draft.seat,
                amount: draft.amount,
                user_id: session.user_id,
                sold_at: &sold_at,
            })
            .map_err(translate_persistence_error)?;

        info!(
            ticket_id,
            route_id,
            client_id,
            seat = draft.seat,
            amount = draft.amount,
            operator = session.user_id,
            "Sold ticket"
        );
        self.refresh(persistence)?;
        Ok(ticket_id)
    }

    /// Cancels a ticket after confirmation. Only the status changes.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the ticket does not exist, or an
    /// error if the update fails.
    pub fn cancel<C: Confirmation>(
        &mut self,
        persistence: &mut Persistence,
        ticket_id: i64,
        confirmation: &mut C,
    ) -> Result<Decision, ApiError> {
        let ticket: Ticket = persistence
            .get_ticket(ticket_id)
            .map_err(translate_persistence_error)?
            .ok_or_else(|| ApiError::not_found("ticket", ticket_id))?;

        if !confirmation.confirm("Cancel this ticket?") {
            return Ok(Decision::Cancelled);
        }

        persistence
            .cancel_ticket(ticket.id)
            .map_err(translate_persistence_error)?;
        info!(ticket_id, "Cancelled ticket");
        self.refresh(persistence)?;
        Ok(Decision::Confirmed)
    }

    /// Builds the receipt for a ticket. A missing ticket yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn receipt(
        persistence: &mut Persistence,
        ticket_id: i64,
    ) -> Result<Option<Receipt>, ApiError> {
        let data: Option<ReceiptData> = persistence
            .get_receipt(ticket_id)
            .map_err(translate_persistence_error)?;
        Ok(data.map(Receipt::new))
    }
}
