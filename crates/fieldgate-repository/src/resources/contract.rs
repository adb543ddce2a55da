//! Contract resource binding (lookup only).

use crate::{wire, RemoteResource};
use chrono::NaiveDateTime;
use fieldgate_core::{CustomerId, FieldgateResult, SearchParams};
use serde::{Deserialize, Serialize};

/// Wire representation of one contract.
#[derive(Debug, Deserialize)]
pub struct ContractWire {
    #[serde(rename = "contractID")]
    pub contract_id: String,
    #[serde(rename = "customerID")]
    pub customer_id: Option<String>,
    #[serde(rename = "dateSigned")]
    pub date_signed: Option<String>,
    #[serde(rename = "documentState")]
    pub document_state: Option<String>,
}

/// A signed (or pending) service contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractModel {
    pub id: i64,
    pub customer_id: Option<CustomerId>,
    pub date_signed: Option<NaiveDateTime>,
    pub state: Option<String>,
}

/// Placeholder criteria; contracts cannot be searched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractCriteria {
    pub ids: Vec<i64>,
}

/// Contract resource binding (lookup only).
pub struct Contract;

impl RemoteResource for Contract {
    const NAME: &'static str = "contract";
    const ENDPOINT: &'static str = "contract";
    const SUPPORTS_SEARCH: bool = false;

    type Wire = ContractWire;
    type Model = ContractModel;
    type Criteria = ContractCriteria;

    fn map(w: ContractWire) -> FieldgateResult<ContractModel> {
        Ok(ContractModel {
            id: wire::parse_i64(Self::NAME, "contractID", &w.contract_id)?,
            customer_id: wire::opt_i64(Self::NAME, "customerID", w.customer_id.as_deref())?
                .map(CustomerId::new),
            date_signed: wire::opt_datetime(Self::NAME, "dateSigned", w.date_signed.as_deref())?,
            state: wire::opt_string(w.document_state),
        })
    }

    fn search_params(c: &ContractCriteria) -> SearchParams {
        let mut params = SearchParams::new();
        params.set_list("contractIDs", &c.ids);
        params
    }
}
