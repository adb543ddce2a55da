//! Customer resource binding.

use crate::resources::PaymentProfileModel;
use crate::{wire, RemoteResource};
use chrono::NaiveDateTime;
use fieldgate_core::{CustomerId, FieldgateResult, OfficeId, SearchParams};
use serde::{Deserialize, Serialize};

/// Wire representation of one customer.
#[derive(Debug, Deserialize)]
pub struct CustomerWire {
    #[serde(rename = "customerID")]
    pub customer_id: String,
    pub fname: Option<String>,
    pub lname: Option<String>,
    #[serde(rename = "companyName")]
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub balance: Option<String>,
    #[serde(rename = "officeID")]
    pub office_id: Option<String>,
    #[serde(rename = "dateAdded")]
    pub date_added: Option<String>,
    #[serde(rename = "dateUpdated")]
    pub date_updated: Option<String>,
}

/// A portal customer account as known by the remote system.
///
/// Related payment profiles are lazily attached: the model never fetches
/// them itself, a calling service does and hands them over via
/// [`CustomerModel::attach_payment_profiles`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerModel {
    pub id: CustomerId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
    pub balance: f64,
    pub office_id: Option<OfficeId>,
    pub date_added: Option<NaiveDateTime>,
    pub date_updated: Option<NaiveDateTime>,
    #[serde(default)]
    pub payment_profiles: Vec<PaymentProfileModel>,
}

impl CustomerModel {
    /// Attaches the customer's payment profiles, replacing any previously
    /// attached set.
    pub fn attach_payment_profiles(&mut self, profiles: Vec<PaymentProfileModel>) {
        self.payment_profiles = profiles;
    }

    /// Returns a display name: company name, or "first last", or the account
    /// number as a fallback.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(company) = &self.company_name {
            return company.clone();
        }
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.id.to_string(),
        }
    }
}

/// Search criteria for customers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerCriteria {
    pub ids: Vec<i64>,
    pub emails: Vec<String>,
    pub active: Option<bool>,
    pub updated_since: Option<chrono::NaiveDate>,
}

/// Customer resource binding.
pub struct Customer;

impl RemoteResource for Customer {
    const NAME: &'static str = "customer";
    const ENDPOINT: &'static str = "customer";
    const SUPPORTS_SEARCH: bool = true;

    type Wire = CustomerWire;
    type Model = CustomerModel;
    type Criteria = CustomerCriteria;

    fn map(w: CustomerWire) -> FieldgateResult<CustomerModel> {
        Ok(CustomerModel {
            id: CustomerId::new(wire::parse_i64(Self::NAME, "customerID", &w.customer_id)?),
            first_name: wire::opt_string(w.fname),
            last_name: wire::opt_string(w.lname),
            company_name: wire::opt_string(w.company_name),
            email: wire::opt_string(w.email),
            phone: wire::opt_string(w.phone),
            active: wire::opt_flag(Self::NAME, "status", w.status.as_deref())?.unwrap_or(false),
            balance: wire::opt_f64(Self::NAME, "balance", w.balance.as_deref())?.unwrap_or(0.0),
            office_id: wire::opt_i64(Self::NAME, "officeID", w.office_id.as_deref())?
                .map(OfficeId::new),
            date_added: wire::opt_datetime(Self::NAME, "dateAdded", w.date_added.as_deref())?,
            date_updated: wire::opt_datetime(Self::NAME, "dateUpdated", w.date_updated.as_deref())?,
            payment_profiles: Vec::new(),
        })
    }

    fn search_params(c: &CustomerCriteria) -> SearchParams {
        let mut params = SearchParams::new();
        params.set_list("customerIDs", &c.ids);
        params.set_list("emails", &c.emails);
        params.set_opt_flag("active", c.active);
        params.set_opt_date("dateUpdatedStart", c.updated_since);
        params
    }

    fn ids_criteria(ids: &[i64]) -> CustomerCriteria {
        CustomerCriteria {
            ids: ids.to_vec(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_well_formed_record() {
        let w: CustomerWire = serde_json::from_value(json!({
            "customerID": "2561669",
            "fname": "Dana",
            "lname": "Reyes",
            "companyName": "",
            "email": "dana@example.com",
            "phone": "555-0100",
            "status": "1",
            "balance": "12.50",
            "officeID": "7",
            "dateAdded": "2022-01-15 09:00:00",
            "dateUpdated": "2024-03-01 16:45:12"
        }))
        .unwrap();

        let model = Customer::map(w).expect("Mapping failed");
        assert_eq!(model.id, CustomerId::new(2561669));
        assert!(model.active);
        assert_eq!(model.balance, 12.50);
        assert_eq!(model.office_id, Some(OfficeId::new(7)));
        assert_eq!(model.company_name, None);
        assert!(model.payment_profiles.is_empty());
    }

    #[test]
    fn test_display_name_fallbacks() {
        let w: CustomerWire = serde_json::from_value(json!({"customerID": "5"})).unwrap();
        let mut model = Customer::map(w).unwrap();
        assert_eq!(model.display_name(), "5");

        model.first_name = Some("Dana".to_string());
        assert_eq!(model.display_name(), "Dana");

        model.last_name = Some("Reyes".to_string());
        assert_eq!(model.display_name(), "Dana Reyes");

        model.company_name = Some("Reyes LLC".to_string());
        assert_eq!(model.display_name(), "Reyes LLC");
    }

    #[test]
    fn test_attach_payment_profiles() {
        let w: CustomerWire = serde_json::from_value(json!({"customerID": "5"})).unwrap();
        let mut model = Customer::map(w).unwrap();

        let profile: PaymentProfileModel = serde_json::from_value(json!({
            "id": 900,
            "customer_id": 5,
            "card_type": "visa",
            "last_four": "4242",
            "expiration_month": 12,
            "expiration_year": 2027,
            "active": true
        }))
        .unwrap();

        model.attach_payment_profiles(vec![profile]);
        assert_eq!(model.payment_profiles.len(), 1);
    }

    #[test]
    fn test_search_params_omit_unset() {
        let params = Customer::search_params(&CustomerCriteria::default());
        assert!(params.is_empty());

        let criteria = CustomerCriteria {
            active: Some(true),
            ..Default::default()
        };
        let params = Customer::search_params(&criteria);
        assert_eq!(params.pairs(), &[("active".to_string(), "1".to_string())]);
    }
}
