//! Ticket (invoice) resource binding.

use crate::{wire, RemoteResource};
use chrono::NaiveDate;
use fieldgate_core::{AppointmentId, CustomerId, FieldgateResult, SearchParams};
use serde::{Deserialize, Serialize};

/// Wire representation of one service ticket.
#[derive(Debug, Deserialize)]
pub struct TicketWire {
    #[serde(rename = "ticketID")]
    pub ticket_id: String,
    #[serde(rename = "customerID")]
    pub customer_id: String,
    #[serde(rename = "appointmentID")]
    pub appointment_id: Option<String>,
    pub date: String,
    pub total: Option<String>,
    pub balance: Option<String>,
    #[serde(rename = "serviceCharge")]
    pub service_charge: Option<String>,
}

/// An invoice for rendered service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketModel {
    pub id: i64,
    pub customer_id: CustomerId,
    pub appointment_id: Option<AppointmentId>,
    pub date: NaiveDate,
    pub total: f64,
    pub balance: f64,
    pub service_charge: Option<f64>,
}

impl TicketModel {
    /// Returns true if an open balance remains on the ticket.
    #[must_use]
    pub fn has_open_balance(&self) -> bool {
        self.balance > 0.0
    }
}

/// Search criteria for tickets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketCriteria {
    pub ids: Vec<i64>,
    pub account_numbers: Vec<i64>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    /// Only tickets carrying an open balance.
    pub balance_only: Option<bool>,
}

/// Ticket resource binding.
pub struct Ticket;

impl RemoteResource for Ticket {
    const NAME: &'static str = "ticket";
    const ENDPOINT: &'static str = "ticket";
    const SUPPORTS_SEARCH: bool = true;

    type Wire = TicketWire;
    type Model = TicketModel;
    type Criteria = TicketCriteria;

    fn map(w: TicketWire) -> FieldgateResult<TicketModel> {
        Ok(TicketModel {
            id: wire::parse_i64(Self::NAME, "ticketID", &w.ticket_id)?,
            customer_id: CustomerId::new(wire::parse_i64(Self::NAME, "customerID", &w.customer_id)?),
            appointment_id: wire::opt_i64(Self::NAME, "appointmentID", w.appointment_id.as_deref())?
                .map(AppointmentId::new),
            date: wire::parse_date(Self::NAME, "date", &w.date)?,
            total: wire::opt_f64(Self::NAME, "total", w.total.as_deref())?.unwrap_or(0.0),
            balance: wire::opt_f64(Self::NAME, "balance", w.balance.as_deref())?.unwrap_or(0.0),
            service_charge: wire::opt_f64(Self::NAME, "serviceCharge", w.service_charge.as_deref())?,
        })
    }

    fn search_params(c: &TicketCriteria) -> SearchParams {
        let mut params = SearchParams::new();
        params.set_list("ticketIDs", &c.ids);
        params.set_list("customerIDs", &c.account_numbers);
        params.set_opt_date("dateStart", c.date_start);
        params.set_opt_date("dateEnd", c.date_end);
        params.set_opt_flag("balanceOnly", c.balance_only);
        params
    }

    fn ids_criteria(ids: &[i64]) -> TicketCriteria {
        TicketCriteria {
            ids: ids.to_vec(),
            ..Default::default()
        }
    }
}
