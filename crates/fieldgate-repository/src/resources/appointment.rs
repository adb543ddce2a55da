//! Appointment resource binding.

use crate::{wire, RemoteResource};
use chrono::{NaiveDate, NaiveTime};
use fieldgate_core::{AppointmentId, CustomerId, FieldgateError, FieldgateResult, SearchParams};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Appointment scheduling status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Scheduled but not yet serviced.
    #[default]
    Pending,
    /// Serviced and closed out.
    Completed,
    /// Cancelled before service.
    Cancelled,
}

impl AppointmentStatus {
    /// Decodes the remote status code (0 pending, 1 completed, -1 cancelled).
    pub fn from_wire(code: i32) -> FieldgateResult<Self> {
        match code {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Completed),
            -1 => Ok(Self::Cancelled),
            other => Err(FieldgateError::mapping_field(
                Appointment::NAME,
                "status",
                format!("unknown status code {}", other),
            )),
        }
    }

    /// Returns the remote status code.
    #[must_use]
    pub const fn wire_code(&self) -> i32 {
        match self {
            Self::Pending => 0,
            Self::Completed => 1,
            Self::Cancelled => -1,
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Wire representation of one appointment.
#[derive(Debug, Deserialize)]
pub struct AppointmentWire {
    #[serde(rename = "appointmentID")]
    pub appointment_id: String,
    #[serde(rename = "customerID")]
    pub customer_id: String,
    #[serde(rename = "subscriptionID")]
    pub subscription_id: Option<String>,
    #[serde(rename = "routeID")]
    pub route_id: Option<String>,
    pub date: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub duration: String,
    pub status: String,
    #[serde(rename = "employeeID")]
    pub employee_id: Option<String>,
    pub notes: Option<String>,
}

/// A scheduled service appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentModel {
    pub id: AppointmentId,
    pub account_number: CustomerId,
    pub subscription_id: Option<i64>,
    pub route_id: Option<i64>,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    /// Planned duration in minutes.
    pub duration: i32,
    pub status: AppointmentStatus,
    pub employee_id: Option<i64>,
    pub notes: Option<String>,
}

/// Search criteria for appointments. Empty criteria match all appointments
/// within the tenant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentCriteria {
    pub ids: Vec<i64>,
    pub account_numbers: Vec<i64>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub statuses: Vec<AppointmentStatus>,
    pub employee_ids: Vec<i64>,
}

/// Appointment resource binding.
pub struct Appointment;

impl RemoteResource for Appointment {
    const NAME: &'static str = "appointment";
    const ENDPOINT: &'static str = "appointment";
    const SUPPORTS_SEARCH: bool = true;

    type Wire = AppointmentWire;
    type Model = AppointmentModel;
    type Criteria = AppointmentCriteria;

    fn map(w: AppointmentWire) -> FieldgateResult<AppointmentModel> {
        Ok(AppointmentModel {
            id: AppointmentId::new(wire::parse_i64(Self::NAME, "appointmentID", &w.appointment_id)?),
            account_number: CustomerId::new(wire::parse_i64(Self::NAME, "customerID", &w.customer_id)?),
            subscription_id: wire::opt_i64(Self::NAME, "subscriptionID", w.subscription_id.as_deref())?,
            route_id: wire::opt_i64(Self::NAME, "routeID", w.route_id.as_deref())?,
            date: wire::parse_date(Self::NAME, "date", &w.date)?,
            start_time: wire::opt_time(Self::NAME, "start", w.start.as_deref())?,
            end_time: wire::opt_time(Self::NAME, "end", w.end.as_deref())?,
            duration: wire::parse_i32(Self::NAME, "duration", &w.duration)?,
            status: AppointmentStatus::from_wire(wire::parse_i32(Self::NAME, "status", &w.status)?)?,
            employee_id: wire::opt_i64(Self::NAME, "employeeID", w.employee_id.as_deref())?,
            notes: wire::opt_string(w.notes),
        })
    }

    fn search_params(c: &AppointmentCriteria) -> SearchParams {
        let mut params = SearchParams::new();
        params.set_list("appointmentIDs", &c.ids);
        params.set_list("customerIDs", &c.account_numbers);
        params.set_opt_date("dateStart", c.date_start);
        params.set_opt_date("dateEnd", c.date_end);
        let codes: Vec<i32> = c.statuses.iter().map(AppointmentStatus::wire_code).collect();
        params.set_list("status", &codes);
        params.set_list("employeeIDs", &c.employee_ids);
        params
    }

    fn ids_criteria(ids: &[i64]) -> AppointmentCriteria {
        AppointmentCriteria {
            ids: ids.to_vec(),
            ..Default::default()
        }
    }
}
