//! Note resource binding (lookup only).

use crate::{wire, RemoteResource};
use chrono::NaiveDateTime;
use fieldgate_core::{CustomerId, FieldgateResult, SearchParams};
use serde::{Deserialize, Serialize};

/// Wire representation of one account note.
#[derive(Debug, Deserialize)]
pub struct NoteWire {
    #[serde(rename = "noteID")]
    pub note_id: String,
    #[serde(rename = "customerID")]
    pub customer_id: Option<String>,
    pub date: Option<String>,
    pub contents: Option<String>,
    #[serde(rename = "showCustomer")]
    pub show_customer: Option<String>,
}

/// A free-text note on a customer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteModel {
    pub id: i64,
    pub customer_id: Option<CustomerId>,
    pub date: Option<NaiveDateTime>,
    pub contents: Option<String>,
    pub visible_to_customer: bool,
}

/// Placeholder criteria; notes cannot be searched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteCriteria {
    pub ids: Vec<i64>,
}

/// Note resource binding (lookup only).
pub struct Note;

impl RemoteResource for Note {
    const NAME: &'static str = "note";
    const ENDPOINT: &'static str = "note";
    const SUPPORTS_SEARCH: bool = false;

    type Wire = NoteWire;
    type Model = NoteModel;
    type Criteria = NoteCriteria;

    fn map(w: NoteWire) -> FieldgateResult<NoteModel> {
        Ok(NoteModel {
            id: wire::parse_i64(Self::NAME, "noteID", &w.note_id)?,
            customer_id: wire::opt_i64(Self::NAME, "customerID", w.customer_id.as_deref())?
                .map(CustomerId::new),
            date: wire::opt_datetime(Self::NAME, "date", w.date.as_deref())?,
            contents: wire::opt_string(w.contents),
            visible_to_customer: wire::opt_flag(Self::NAME, "showCustomer", w.show_customer.as_deref())?
                .unwrap_or(false),
        })
    }

    fn search_params(c: &NoteCriteria) -> SearchParams {
        let mut params = SearchParams::new();
        params.set_list("noteIDs", &c.ids);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_well_formed_record() {
        let w: NoteWire = serde_json::from_value(json!({
            "noteID": "8800",
            "customerID": "2561669",
            "date": "2024-03-05 14:20:00",
            "contents": "Customer prefers afternoon visits",
            "showCustomer": "1"
        }))
        .unwrap();

        let model = Note::map(w).expect("Mapping failed");
        assert_eq!(model.id, 8800);
        assert!(model.visible_to_customer);
    }
}
