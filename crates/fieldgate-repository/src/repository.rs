//! The generic tenant-scoped resource repository.

use crate::RemoteResource;
use fieldgate_core::{FieldgateError, FieldgateResult, OfficeId, PageRequest, TenantContext};
use fieldgate_remote::ResourceClient;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Generic repository over one remote resource type.
///
/// The find/find_many/search protocol is implemented once here; concrete
/// repositories are type aliases supplying a [`RemoteResource`] binding.
/// Tenant scoping is fluent and immutable: `with_tenant` returns a scoped
/// copy, so a repository value can be shared and re-scoped per call chain.
///
/// Results are returned in remote API order; callers needing a specific
/// ordering sort client-side.
pub struct ResourceRepository<R, C> {
    client: Arc<C>,
    context: TenantContext,
    _resource: PhantomData<fn() -> R>,
}

impl<R, C> Clone for ResourceRepository<R, C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            context: self.context,
            _resource: PhantomData,
        }
    }
}

impl<R, C> ResourceRepository<R, C>
where
    R: RemoteResource,
    C: ResourceClient,
{
    /// Creates a repository with an empty tenant context.
    #[must_use]
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            context: TenantContext::new(),
            _resource: PhantomData,
        }
    }

    /// Creates a repository with a pre-built tenant context.
    #[must_use]
    pub fn with_context(client: Arc<C>, context: TenantContext) -> Self {
        Self {
            client,
            context,
            _resource: PhantomData,
        }
    }

    /// Returns a copy scoped to the given office.
    #[must_use]
    pub fn with_tenant(&self, office_id: OfficeId) -> Self {
        Self {
            client: Arc::clone(&self.client),
            context: self.context.with_tenant(office_id),
            _resource: PhantomData,
        }
    }

    /// Returns a copy with a pagination window set; `search` then returns
    /// exactly one page instead of walking all pages.
    #[must_use]
    pub fn with_pagination(&self, page: usize, size: usize) -> Self {
        Self {
            client: Arc::clone(&self.client),
            context: self.context.with_pagination(page, size),
            _resource: PhantomData,
        }
    }

    /// Returns the current tenant context.
    #[must_use]
    pub const fn context(&self) -> TenantContext {
        self.context
    }

    /// Returns whether the bound resource supports search.
    #[must_use]
    pub const fn supports_search() -> bool {
        R::SUPPORTS_SEARCH
    }

    /// Looks up a single entity by id.
    ///
    /// Returns `Ok(None)` when the remote system reports the entity does not
    /// exist. Any other remote failure propagates.
    pub async fn find(&self, id: i64) -> FieldgateResult<Option<R::Model>> {
        let office_id = self.context.office_id()?;
        debug!(resource = R::NAME, id, office = %office_id, "find");

        match self.client.fetch_one(R::ENDPOINT, office_id, id).await? {
            Some(value) => {
                let wire: R::Wire = serde_json::from_value(value).map_err(|e| {
                    FieldgateError::mapping(R::NAME, format!("undecodable wire record: {}", e))
                })?;
                Ok(Some(R::map(wire)?))
            }
            None => Ok(None),
        }
    }

    /// Fetches the entities with the given ids.
    ///
    /// Delegates to `search` with an id-list criteria. For resource types
    /// without search capability this returns an empty collection; searching
    /// by id is simply unavailable for them, which is a declared per-resource
    /// capability, not a failure.
    pub async fn find_many(&self, ids: &[i64]) -> FieldgateResult<Vec<R::Model>> {
        self.context.office_id()?;

        if !R::SUPPORTS_SEARCH {
            debug!(
                resource = R::NAME,
                "find_many on non-searchable resource, returning empty"
            );
            return Ok(Vec::new());
        }
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.search(R::ids_criteria(ids)).await
    }

    /// Searches the resource with the given criteria.
    ///
    /// Returns one page when a pagination window is set on the context,
    /// otherwise exhaustively fetches and concatenates all pages. Mapping is
    /// all-or-nothing: one malformed record aborts the whole call.
    pub async fn search(&self, criteria: R::Criteria) -> FieldgateResult<Vec<R::Model>> {
        let office_id = self.context.office_id()?;

        if !R::SUPPORTS_SEARCH {
            return Err(FieldgateError::unsupported(R::NAME, "search"));
        }

        let started = Instant::now();
        let params = R::search_params(&criteria);

        let models = if let Some(page) = self.context.page() {
            let wire_page = self
                .client
                .fetch_page(R::ENDPOINT, office_id, &params, page)
                .await?;
            Self::map_items(wire_page.items)?
        } else {
            let mut all = Vec::new();
            let mut page = PageRequest::first();
            loop {
                let wire_page = self
                    .client
                    .fetch_page(R::ENDPOINT, office_id, &params, page)
                    .await?;
                let last = wire_page.is_last();
                all.extend(Self::map_items(wire_page.items)?);
                if last {
                    break;
                }
                page = page.next();
            }
            all
        };

        info!(
            resource = R::NAME,
            elapsed_ms = started.elapsed().as_millis() as u64,
            results = models.len(),
            "search completed"
        );

        Ok(models)
    }

    fn map_items(items: Vec<serde_json::Value>) -> FieldgateResult<Vec<R::Model>> {
        items
            .into_iter()
            .map(|item| {
                let wire: R::Wire = serde_json::from_value(item).map_err(|e| {
                    FieldgateError::mapping(R::NAME, format!("undecodable wire record: {}", e))
                })?;
                R::map(wire)
            })
            .collect()
    }
}
