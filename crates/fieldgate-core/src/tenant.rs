//! Tenant (office) scoping for repository operations.

use crate::{FieldgateError, FieldgateResult, OfficeId, PageRequest};
use serde::{Deserialize, Serialize};

/// The tenant scope and optional pagination window for one logical operation.
///
/// A context is immutable once constructed; the `with_*` methods return new
/// values, so a context can be shared freely across concurrent calls. Every
/// repository operation that talks to the remote system resolves its tenant
/// through [`TenantContext::office_id`] before any network interaction and
/// fails with [`FieldgateError::TenantNotSet`] when no tenant is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantContext {
    office_id: Option<OfficeId>,
    page: Option<PageRequest>,
}

impl TenantContext {
    /// Creates an empty context with no tenant and no pagination window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context scoped to the given office.
    #[must_use]
    pub fn for_tenant(office_id: OfficeId) -> Self {
        Self {
            office_id: Some(office_id),
            page: None,
        }
    }

    /// Returns a copy of this context scoped to the given office.
    #[must_use]
    pub fn with_tenant(self, office_id: OfficeId) -> Self {
        Self {
            office_id: Some(office_id),
            ..self
        }
    }

    /// Returns a copy of this context with a pagination window set.
    ///
    /// With a window set, `search` returns exactly one page; without one it
    /// exhaustively fetches all pages.
    #[must_use]
    pub fn with_pagination(self, page: usize, size: usize) -> Self {
        Self {
            page: Some(PageRequest::new(page, size)),
            ..self
        }
    }

    /// Resolves the active office, failing when none is set.
    pub fn office_id(&self) -> FieldgateResult<OfficeId> {
        self.office_id.ok_or(FieldgateError::TenantNotSet)
    }

    /// Returns the active office without failing.
    #[must_use]
    pub const fn tenant(&self) -> Option<OfficeId> {
        self.office_id
    }

    /// Returns true if a pagination window is set.
    #[must_use]
    pub const fn is_pagination_set(&self) -> bool {
        self.page.is_some()
    }

    /// Returns the pagination window, if any.
    #[must_use]
    pub const fn page(&self) -> Option<PageRequest> {
        self.page
    }
}
