//! Route resource binding.

use crate::{wire, RemoteResource};
use chrono::NaiveDate;
use fieldgate_core::{FieldgateResult, SearchParams};
use serde::{Deserialize, Serialize};

/// Wire representation of one route.
#[derive(Debug, Deserialize)]
pub struct RouteWire {
    #[serde(rename = "routeID")]
    pub route_id: String,
    pub title: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "templateID")]
    pub template_id: Option<String>,
    #[serde(rename = "assignedTech")]
    pub assigned_tech: Option<String>,
}

/// A technician's route for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteModel {
    pub id: i64,
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub template_id: Option<i64>,
    pub assigned_employee_id: Option<i64>,
}

/// Search criteria for routes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteCriteria {
    pub ids: Vec<i64>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
}

/// Route resource binding.
pub struct Route;

impl RemoteResource for Route {
    const NAME: &'static str = "route";
    const ENDPOINT: &'static str = "route";
    const SUPPORTS_SEARCH: bool = true;

    type Wire = RouteWire;
    type Model = RouteModel;
    type Criteria = RouteCriteria;

    fn map(w: RouteWire) -> FieldgateResult<RouteModel> {
        Ok(RouteModel {
            id: wire::parse_i64(Self::NAME, "routeID", &w.route_id)?,
            title: wire::opt_string(w.title),
            date: wire::opt_date(Self::NAME, "date", w.date.as_deref())?,
            template_id: wire::opt_i64(Self::NAME, "templateID", w.template_id.as_deref())?,
            assigned_employee_id: wire::opt_i64(Self::NAME, "assignedTech", w.assigned_tech.as_deref())?,
        })
    }

    fn search_params(c: &RouteCriteria) -> SearchParams {
        let mut params = SearchParams::new();
        params.set_list("routeIDs", &c.ids);
        params.set_opt_date("dateStart", c.date_start);
        params.set_opt_date("dateEnd", c.date_end);
        params
    }

    fn ids_criteria(ids: &[i64]) -> RouteCriteria {
        RouteCriteria {
            ids: ids.to_vec(),
            ..Default::default()
        }
    }
}
