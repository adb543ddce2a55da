//! Remote resource client trait.

use async_trait::async_trait;
use fieldgate_core::{FieldgateResult, OfficeId, PageRequest, SearchParams, WirePage};
use shaku::Interface;

/// Low-level access to the remote field-service API.
///
/// The client works in raw wire records (`serde_json::Value`) so that one
/// implementation serves every resource type; decoding into typed wire
/// structs happens in the repository layer. Every call is scoped to exactly
/// one office. The client owns no retry policy; transport timeouts and remote
/// failures surface as `RemoteResource` errors and are never swallowed.
#[async_trait]
pub trait ResourceClient: Interface + Send + Sync {
    /// Fetches a single entity by id.
    ///
    /// Returns `Ok(None)` when the remote system reports the entity does not
    /// exist; lookup-miss is an expected outcome, not a failure.
    async fn fetch_one(
        &self,
        endpoint: &str,
        office_id: OfficeId,
        id: i64,
    ) -> FieldgateResult<Option<serde_json::Value>>;

    /// Fetches one page of a filtered search.
    async fn fetch_page(
        &self,
        endpoint: &str,
        office_id: OfficeId,
        params: &SearchParams,
        page: PageRequest,
    ) -> FieldgateResult<WirePage>;
}
