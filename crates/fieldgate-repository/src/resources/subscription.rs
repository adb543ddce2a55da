//! Subscription resource binding.

use crate::{wire, RemoteResource};
use chrono::NaiveDate;
use fieldgate_core::{CustomerId, FieldgateResult, SearchParams};
use serde::{Deserialize, Serialize};

/// Wire representation of one service subscription.
#[derive(Debug, Deserialize)]
pub struct SubscriptionWire {
    #[serde(rename = "subscriptionID")]
    pub subscription_id: String,
    #[serde(rename = "customerID")]
    pub customer_id: String,
    #[serde(rename = "serviceID")]
    pub service_id: String,
    pub frequency: Option<String>,
    #[serde(rename = "nextService")]
    pub next_service: Option<String>,
    #[serde(rename = "lastCompleted")]
    pub last_completed: Option<String>,
    pub active: Option<String>,
    #[serde(rename = "agreementLength")]
    pub agreement_length: Option<String>,
}

/// A recurring service agreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionModel {
    pub id: i64,
    pub customer_id: CustomerId,
    pub service_type_id: i64,
    /// Visits per year.
    pub frequency: Option<i32>,
    pub next_service: Option<NaiveDate>,
    pub last_completed: Option<NaiveDate>,
    pub active: bool,
    /// Agreement length in months.
    pub agreement_length_months: Option<i32>,
}

/// Search criteria for subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionCriteria {
    pub ids: Vec<i64>,
    pub account_numbers: Vec<i64>,
    pub service_type_ids: Vec<i64>,
    pub active: Option<bool>,
}

/// Subscription resource binding.
pub struct Subscription;

impl RemoteResource for Subscription {
    const NAME: &'static str = "subscription";
    const ENDPOINT: &'static str = "subscription";
    const SUPPORTS_SEARCH: bool = true;

    type Wire = SubscriptionWire;
    type Model = SubscriptionModel;
    type Criteria = SubscriptionCriteria;

    fn map(w: SubscriptionWire) -> FieldgateResult<SubscriptionModel> {
        Ok(SubscriptionModel {
            id: wire::parse_i64(Self::NAME, "subscriptionID", &w.subscription_id)?,
            customer_id: CustomerId::new(wire::parse_i64(Self::NAME, "customerID", &w.customer_id)?),
            service_type_id: wire::parse_i64(Self::NAME, "serviceID", &w.service_id)?,
            frequency: wire::opt_i32(Self::NAME, "frequency", w.frequency.as_deref())?,
            next_service: wire::opt_date(Self::NAME, "nextService", w.next_service.as_deref())?,
            last_completed: wire::opt_date(Self::NAME, "lastCompleted", w.last_completed.as_deref())?,
            active: wire::opt_flag(Self::NAME, "active", w.active.as_deref())?.unwrap_or(false),
            agreement_length_months: wire::opt_i32(
                Self::NAME,
                "agreementLength",
                w.agreement_length.as_deref(),
            )?,
        })
    }

    fn search_params(c: &SubscriptionCriteria) -> SearchParams {
        let mut params = SearchParams::new();
        params.set_list("subscriptionIDs", &c.ids);
        params.set_list("customerIDs", &c.account_numbers);
        params.set_list("serviceIDs", &c.service_type_ids);
        params.set_opt_flag("active", c.active);
        params
    }

    fn ids_criteria(ids: &[i64]) -> SubscriptionCriteria {
        SubscriptionCriteria {
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
        let w: SubscriptionWire = serde_json::from_value(json!({
            "subscriptionID": "88",
            "customerID": "2561669",
            "serviceID": "4",
            "frequency": "12",
            "nextService": "2024-04-01",
            "lastCompleted": "2024-03-01",
            "active": "1",
            "agreementLength": "24"
        }))
        .unwrap();

        let model = Subscription::map(w).expect("Mapping failed");
        assert_eq!(model.id, 88);
        assert_eq!(model.service_type_id, 4);
        assert_eq!(model.frequency, Some(12));
        assert!(model.active);
        assert_eq!(model.agreement_length_months, Some(24));
    }

    #[test]
    fn test_map_requires_service_id() {
        let result: Result<SubscriptionWire, _> = serde_json::from_value(json!({
            "subscriptionID": "88",
            "customerID": "2561669"
        }));
        // serviceID is a required wire field
        assert!(result.is_err());
    }

    #[test]
    fn test_search_params() {
        let criteria = SubscriptionCriteria {
            service_type_ids: vec![4, 9],
            active: Some(false),
            ..Default::default()
        };
        let params = Subscription::search_params(&criteria);
        assert_eq!(
            params.pairs(),
            &[
                ("serviceIDs".to_string(), "4,9".to_string()),
                ("active".to_string(), "0".to_string()),
            ]
        );
    }
}
