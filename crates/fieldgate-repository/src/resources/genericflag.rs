//! Generic flag resource binding.

use crate::{wire, RemoteResource};
use fieldgate_core::{FieldgateResult, SearchParams};
use serde::{Deserialize, Serialize};

/// Wire representation of one generic flag.
#[derive(Debug, Deserialize)]
pub struct GenericFlagWire {
    #[serde(rename = "genericFlagID")]
    pub generic_flag_id: String,
    pub code: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// A free-form marker that offices attach to accounts and appointments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericFlagModel {
    pub id: i64,
    pub code: Option<String>,
    pub description: Option<String>,
    pub active: bool,
}

/// Search criteria for generic flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericFlagCriteria {
    pub ids: Vec<i64>,
    pub codes: Vec<String>,
}

/// Generic flag resource binding.
pub struct GenericFlag;

impl RemoteResource for GenericFlag {
    const NAME: &'static str = "genericflag";
    const ENDPOINT: &'static str = "genericFlag";
    const SUPPORTS_SEARCH: bool = true;

    type Wire = GenericFlagWire;
    type Model = GenericFlagModel;
    type Criteria = GenericFlagCriteria;

    fn map(w: GenericFlagWire) -> FieldgateResult<GenericFlagModel> {
        Ok(GenericFlagModel {
            id: wire::parse_i64(Self::NAME, "genericFlagID", &w.generic_flag_id)?,
            code: wire::opt_string(w.code),
            description: wire::opt_string(w.description),
            active: wire::opt_flag(Self::NAME, "status", w.status.as_deref())?.unwrap_or(false),
        })
    }

    fn search_params(c: &GenericFlagCriteria) -> SearchParams {
        let mut params = SearchParams::new();
        params.set_list("genericFlagIDs", &c.ids);
        params.set_list("codes", &c.codes);
        params
    }

    fn ids_criteria(ids: &[i64]) -> GenericFlagCriteria {
        GenericFlagCriteria {
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
        let w: GenericFlagWire = serde_json::from_value(json!({
            "genericFlagID": "17",
            "code": "VIP",
            "description": "priority scheduling",
            "status": "1"
        }))
        .unwrap();

        let model = GenericFlag::map(w).expect("Mapping failed");
        assert_eq!(model.id, 17);
        assert_eq!(model.code.as_deref(), Some("VIP"));
        assert!(model.active);
    }
}
