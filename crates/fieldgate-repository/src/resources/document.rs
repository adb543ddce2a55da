//! Document resource binding.
//!
//! The remote system exposes documents for single-entity lookup only; there
//! is no search endpoint for them.

use crate::{wire, RemoteResource};
use chrono::NaiveDateTime;
use fieldgate_core::{CustomerId, FieldgateResult, SearchParams};
use serde::{Deserialize, Serialize};

/// Wire representation of one document.
#[derive(Debug, Deserialize)]
pub struct DocumentWire {
    #[serde(rename = "documentID")]
    pub document_id: String,
    #[serde(rename = "customerID")]
    pub customer_id: Option<String>,
    #[serde(rename = "uploadDate")]
    pub upload_date: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "documentLink")]
    pub document_link: Option<String>,
}

/// A document stored against a customer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentModel {
    pub id: i64,
    pub customer_id: Option<CustomerId>,
    pub uploaded_at: Option<NaiveDateTime>,
    pub description: Option<String>,
    pub link: Option<String>,
}

/// Placeholder criteria; documents cannot be searched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentCriteria {
    pub ids: Vec<i64>,
}

/// Document resource binding (lookup only).
pub struct Document;

impl RemoteResource for Document {
    const NAME: &'static str = "document";
    const ENDPOINT: &'static str = "document";
    const SUPPORTS_SEARCH: bool = false;

    type Wire = DocumentWire;
    type Model = DocumentModel;
    type Criteria = DocumentCriteria;

    fn map(w: DocumentWire) -> FieldgateResult<DocumentModel> {
        Ok(DocumentModel {
            id: wire::parse_i64(Self::NAME, "documentID", &w.document_id)?,
            customer_id: wire::opt_i64(Self::NAME, "customerID", w.customer_id.as_deref())?
                .map(CustomerId::new),
            uploaded_at: wire::opt_datetime(Self::NAME, "uploadDate", w.upload_date.as_deref())?,
            description: wire::opt_string(w.description),
            link: wire::opt_string(w.document_link),
        })
    }

    fn search_params(c: &DocumentCriteria) -> SearchParams {
        let mut params = SearchParams::new();
        params.set_list("documentIDs", &c.ids);
        params
    }
}
