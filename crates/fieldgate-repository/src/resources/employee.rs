//! Employee resource binding.

use crate::{wire, RemoteResource};
use fieldgate_core::{FieldgateResult, SearchParams};
use serde::{Deserialize, Serialize};

/// Wire representation of one employee.
#[derive(Debug, Deserialize)]
pub struct EmployeeWire {
    #[serde(rename = "employeeID")]
    pub employee_id: String,
    pub fname: Option<String>,
    pub lname: Option<String>,
    pub active: Option<String>,
    #[serde(rename = "type")]
    pub employee_type: Option<String>,
}

/// A field-service employee (technician, office staff, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeModel {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub active: bool,
    /// Remote employee type code.
    pub type_code: Option<i32>,
}

/// Search criteria for employees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCriteria {
    pub ids: Vec<i64>,
    pub active: Option<bool>,
    pub type_codes: Vec<i32>,
}

/// Employee resource binding.
pub struct Employee;

impl RemoteResource for Employee {
    const NAME: &'static str = "employee";
    const ENDPOINT: &'static str = "employee";
    const SUPPORTS_SEARCH: bool = true;

    type Wire = EmployeeWire;
    type Model = EmployeeModel;
    type Criteria = EmployeeCriteria;

    fn map(w: EmployeeWire) -> FieldgateResult<EmployeeModel> {
        Ok(EmployeeModel {
            id: wire::parse_i64(Self::NAME, "employeeID", &w.employee_id)?,
            first_name: wire::opt_string(w.fname),
            last_name: wire::opt_string(w.lname),
            active: wire::opt_flag(Self::NAME, "active", w.active.as_deref())?.unwrap_or(false),
            type_code: wire::opt_i32(Self::NAME, "type", w.employee_type.as_deref())?,
        })
    }

    fn search_params(c: &EmployeeCriteria) -> SearchParams {
        let mut params = SearchParams::new();
        params.set_list("employeeIDs", &c.ids);
        params.set_opt_flag("active", c.active);
        params.set_list("type", &c.type_codes);
        params
    }

    fn ids_criteria(ids: &[i64]) -> EmployeeCriteria {
        EmployeeCriteria {
            ids: ids.to_vec(),
            ..Default::default()
        }
    }
}
