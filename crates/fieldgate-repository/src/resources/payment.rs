//! Payment resource binding.

use crate::{wire, RemoteResource};
use chrono::NaiveDate;
use fieldgate_core::{CustomerId, FieldgateResult, SearchParams};
use serde::{Deserialize, Serialize};

/// Wire representation of one payment.
#[derive(Debug, Deserialize)]
pub struct PaymentWire {
    #[serde(rename = "paymentID")]
    pub payment_id: String,
    #[serde(rename = "customerID")]
    pub customer_id: String,
    pub date: String,
    pub amount: String,
    #[serde(rename = "appliedAmount")]
    pub applied_amount: Option<String>,
    #[serde(rename = "paymentMethod")]
    pub payment_method: Option<String>,
    pub status: Option<String>,
}

/// A recorded customer payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentModel {
    pub id: i64,
    pub customer_id: CustomerId,
    pub date: NaiveDate,
    pub amount: f64,
    pub applied_amount: Option<f64>,
    /// Remote payment method code (card, ACH, cash, ...).
    pub method_code: Option<i32>,
    /// Remote processing status code.
    pub status_code: Option<i32>,
}

/// Search criteria for payments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentCriteria {
    pub ids: Vec<i64>,
    pub account_numbers: Vec<i64>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
}

/// Payment resource binding.
pub struct Payment;

impl RemoteResource for Payment {
    const NAME: &'static str = "payment";
    const ENDPOINT: &'static str = "payment";
    const SUPPORTS_SEARCH: bool = true;

    type Wire = PaymentWire;
    type Model = PaymentModel;
    type Criteria = PaymentCriteria;

    fn map(w: PaymentWire) -> FieldgateResult<PaymentModel> {
        Ok(PaymentModel {
            id: wire::parse_i64(Self::NAME, "paymentID", &w.payment_id)?,
            customer_id: CustomerId::new(wire::parse_i64(Self::NAME, "customerID", &w.customer_id)?),
            date: wire::parse_date(Self::NAME, "date", &w.date)?,
            amount: wire::parse_f64(Self::NAME, "amount", &w.amount)?,
            applied_amount: wire::opt_f64(Self::NAME, "appliedAmount", w.applied_amount.as_deref())?,
            method_code: wire::opt_i32(Self::NAME, "paymentMethod", w.payment_method.as_deref())?,
            status_code: wire::opt_i32(Self::NAME, "status", w.status.as_deref())?,
        })
    }

    fn search_params(c: &PaymentCriteria) -> SearchParams {
        let mut params = SearchParams::new();
        params.set_list("paymentIDs", &c.ids);
        params.set_list("customerIDs", &c.account_numbers);
        params.set_opt_date("dateStart", c.date_start);
        params.set_opt_date("dateEnd", c.date_end);
        params
    }

    fn ids_criteria(ids: &[i64]) -> PaymentCriteria {
        PaymentCriteria {
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
        let w: PaymentWire = serde_json::from_value(json!({
            "paymentID": "501",
            "customerID": "2561669",
            "date": "2024-02-20",
            "amount": "129.99",
            "appliedAmount": "129.99",
            "paymentMethod": "1",
            "status": "2"
        }))
        .unwrap();

        let model = Payment::map(w).expect("Mapping failed");
        assert_eq!(model.id, 501);
        assert_eq!(model.amount, 129.99);
        assert_eq!(model.method_code, Some(1));
        assert_eq!(model.status_code, Some(2));
    }

    #[test]
    fn test_map_rejects_bad_amount() {
        let w: PaymentWire = serde_json::from_value(json!({
            "paymentID": "501",
            "customerID": "1",
            "date": "2024-02-20",
            "amount": "$129.99"
        }))
        .unwrap();
        assert!(Payment::map(w).is_err());
    }

    #[test]
    fn test_search_params_date_window() {
        let criteria = PaymentCriteria {
            account_numbers: vec![2561669],
            date_start: NaiveDate::from_ymd_opt(2024, 1, 1),
            date_end: NaiveDate::from_ymd_opt(2024, 3, 31),
            ..Default::default()
        };
        let params = Payment::search_params(&criteria);
        assert_eq!(
            params.pairs(),
            &[
                ("customerIDs".to_string(), "2561669".to_string()),
                ("dateStart".to_string(), "2024-01-01".to_string()),
                ("dateEnd".to_string(), "2024-03-31".to_string()),
            ]
        );
    }
}
