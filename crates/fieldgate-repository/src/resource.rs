//! Per-resource binding for the generic repository.

use fieldgate_core::{FieldgateResult, SearchParams};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Binding between one remote resource type and the generic repository.
///
/// One implementation exists per resource type. It supplies everything the
/// generic protocol needs: the endpoint, the search capability flag, the
/// entity mapper (`map`), and the criteria-to-wire-parameters factory
/// (`search_params`). Implementations are stateless; all methods are pure.
pub trait RemoteResource: Send + Sync + 'static {
    /// Resource type name used in logs, errors, and cache keys.
    const NAME: &'static str;

    /// Remote endpoint path segment.
    const ENDPOINT: &'static str;

    /// Whether the remote system exposes a search endpoint for this resource.
    ///
    /// When false, `search` raises `UnsupportedOperation` and `find_many`
    /// returns an empty collection.
    const SUPPORTS_SEARCH: bool;

    /// The remote wire representation of one entity. Ephemeral: constructed
    /// per response, discarded after mapping.
    type Wire: DeserializeOwned + Send;

    /// The internal domain model.
    type Model: Serialize + DeserializeOwned + Clone + Send + Sync;

    /// The search criteria value object for this resource.
    type Criteria: Serialize + Default + Clone + Send + Sync;

    /// Translates one wire record into a domain model.
    ///
    /// Total for well-formed input; fails with a `Mapping` error on missing
    /// required fields or unparseable encodings.
    fn map(wire: Self::Wire) -> FieldgateResult<Self::Model>;

    /// Translates search criteria into wire query parameters, omitting every
    /// unset field.
    fn search_params(criteria: &Self::Criteria) -> SearchParams;

    /// Builds the criteria selecting exactly the given ids.
    ///
    /// Used by `find_many` on searchable resources. The default returns an
    /// empty criteria; searchable resources override it.
    fn ids_criteria(ids: &[i64]) -> Self::Criteria {
        let _ = ids;
        Self::Criteria::default()
    }
}
