//! Service type resource binding.

use crate::{wire, RemoteResource};
use fieldgate_core::{FieldgateResult, SearchParams};
use serde::{Deserialize, Serialize};

/// Wire representation of one service type.
#[derive(Debug, Deserialize)]
pub struct ServiceTypeWire {
    #[serde(rename = "typeID")]
    pub type_id: String,
    pub description: String,
    pub frequency: Option<String>,
    pub category: Option<String>,
}

/// A service offering (e.g. quarterly pest control).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceTypeModel {
    pub id: i64,
    pub description: String,
    /// Default visits per year.
    pub frequency: Option<i32>,
    pub category: Option<String>,
}

/// Search criteria for service types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceTypeCriteria {
    pub ids: Vec<i64>,
    pub categories: Vec<String>,
}

/// Service type resource binding.
pub struct ServiceType;

impl RemoteResource for ServiceType {
    const NAME: &'static str = "service_type";
    const ENDPOINT: &'static str = "serviceType";
    const SUPPORTS_SEARCH: bool = true;

    type Wire = ServiceTypeWire;
    type Model = ServiceTypeModel;
    type Criteria = ServiceTypeCriteria;

    fn map(w: ServiceTypeWire) -> FieldgateResult<ServiceTypeModel> {
        Ok(ServiceTypeModel {
            id: wire::parse_i64(Self::NAME, "typeID", &w.type_id)?,
            description: w.description,
            frequency: wire::opt_i32(Self::NAME, "frequency", w.frequency.as_deref())?,
            category: wire::opt_string(w.category),
        })
    }

    fn search_params(c: &ServiceTypeCriteria) -> SearchParams {
        let mut params = SearchParams::new();
        params.set_list("typeIDs", &c.ids);
        params.set_list("categories", &c.categories);
        params
    }

    fn ids_criteria(ids: &[i64]) -> ServiceTypeCriteria {
        ServiceTypeCriteria {
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
        let w: ServiceTypeWire = serde_json::from_value(json!({
            "typeID": "4",
            "description": "Quarterly General Pest",
            "frequency": "4",
            "category": "recurring"
        }))
        .unwrap();

        let model = ServiceType::map(w).expect("Mapping failed");
        assert_eq!(model.id, 4);
        assert_eq!(model.description, "Quarterly General Pest");
        assert_eq!(model.frequency, Some(4));
    }
}
