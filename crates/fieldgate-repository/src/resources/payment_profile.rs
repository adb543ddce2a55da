//! Payment profile resource binding.

use crate::{wire, RemoteResource};
use fieldgate_core::{CustomerId, FieldgateResult, SearchParams};
use serde::{Deserialize, Serialize};

/// Wire representation of one stored payment profile.
#[derive(Debug, Deserialize)]
pub struct PaymentProfileWire {
    #[serde(rename = "paymentProfileID")]
    pub payment_profile_id: String,
    #[serde(rename = "customerID")]
    pub customer_id: String,
    #[serde(rename = "cardType")]
    pub card_type: Option<String>,
    #[serde(rename = "lastFour")]
    pub last_four: Option<String>,
    #[serde(rename = "expMonth")]
    pub exp_month: Option<String>,
    #[serde(rename = "expYear")]
    pub exp_year: Option<String>,
    pub status: Option<String>,
}

/// A stored payment instrument belonging to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentProfileModel {
    pub id: i64,
    pub customer_id: CustomerId,
    pub card_type: Option<String>,
    pub last_four: Option<String>,
    pub expiration_month: Option<i32>,
    pub expiration_year: Option<i32>,
    pub active: bool,
}

/// Search criteria for payment profiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentProfileCriteria {
    pub ids: Vec<i64>,
    pub account_numbers: Vec<i64>,
    pub active: Option<bool>,
}

/// Payment profile resource binding.
pub struct PaymentProfile;

impl RemoteResource for PaymentProfile {
    const NAME: &'static str = "payment_profile";
    const ENDPOINT: &'static str = "paymentProfile";
    const SUPPORTS_SEARCH: bool = true;

    type Wire = PaymentProfileWire;
    type Model = PaymentProfileModel;
    type Criteria = PaymentProfileCriteria;

    fn map(w: PaymentProfileWire) -> FieldgateResult<PaymentProfileModel> {
        Ok(PaymentProfileModel {
            id: wire::parse_i64(Self::NAME, "paymentProfileID", &w.payment_profile_id)?,
            customer_id: CustomerId::new(wire::parse_i64(Self::NAME, "customerID", &w.customer_id)?),
            card_type: wire::opt_string(w.card_type),
            last_four: wire::opt_string(w.last_four),
            expiration_month: wire::opt_i32(Self::NAME, "expMonth", w.exp_month.as_deref())?,
            expiration_year: wire::opt_i32(Self::NAME, "expYear", w.exp_year.as_deref())?,
            active: wire::opt_flag(Self::NAME, "status", w.status.as_deref())?.unwrap_or(false),
        })
    }

    fn search_params(c: &PaymentProfileCriteria) -> SearchParams {
        let mut params = SearchParams::new();
        params.set_list("paymentProfileIDs", &c.ids);
        params.set_list("customerIDs", &c.account_numbers);
        params.set_opt_flag("active", c.active);
        params
    }

    fn ids_criteria(ids: &[i64]) -> PaymentProfileCriteria {
        PaymentProfileCriteria {
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
        let w: PaymentProfileWire = serde_json::from_value(json!({
            "paymentProfileID": "900",
            "customerID": "2561669",
            "cardType": "visa",
            "lastFour": "4242",
            "expMonth": "12",
            "expYear": "2027",
            "status": "1"
        }))
        .unwrap();

        let model = PaymentProfile::map(w).expect("Mapping failed");
        assert_eq!(model.id, 900);
        assert_eq!(model.last_four.as_deref(), Some("4242"));
        assert_eq!(model.expiration_month, Some(12));
        assert!(model.active);
    }

    #[test]
    fn test_missing_optional_fields_map_to_defaults() {
        let w: PaymentProfileWire = serde_json::from_value(json!({
            "paymentProfileID": "901",
            "customerID": "5"
        }))
        .unwrap();

        let model = PaymentProfile::map(w).unwrap();
        assert_eq!(model.card_type, None);
        assert!(!model.active);
    }
}
