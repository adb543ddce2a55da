//! Pagination types for bulk reads against the remote API.

use serde::{Deserialize, Serialize};

/// A request for a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (0-indexed).
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
}

impl PageRequest {
    /// The default page size for remote bulk reads.
    pub const DEFAULT_SIZE: usize = 100;
    /// The maximum page size the remote API accepts.
    pub const MAX_SIZE: usize = 1000;

    /// Creates a new page request.
    #[must_use]
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size: size.min(Self::MAX_SIZE).max(1),
        }
    }

    /// Creates a page request for the first page with the default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }

    /// Returns the request for the following page.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            page: self.page + 1,
            size: self.size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of raw wire records as returned by the remote system.
///
/// Items are kept as raw JSON values; decoding into a typed wire record is
/// the repository's job so that one client can serve every resource type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WirePage {
    /// The raw wire records on this page.
    pub items: Vec<serde_json::Value>,
    /// The page number (0-indexed).
    pub page: usize,
    /// The requested page size.
    pub size: usize,
    /// The total number of records across all pages.
    pub total_elements: u64,
    /// The total number of pages.
    pub total_pages: u64,
}

impl WirePage {
    /// Creates a new wire page, deriving `total_pages` from the totals.
    #[must_use]
    pub fn new(items: Vec<serde_json::Value>, page: usize, size: usize, total_elements: u64) -> Self {
        let total_pages = if size > 0 {
            total_elements.div_ceil(size as u64)
        } else {
            0
        };

        Self {
            items,
            page,
            size,
            total_elements,
            total_pages,
        }
    }

    /// Creates an empty page.
    #[must_use]
    pub fn empty(page: usize, size: usize) -> Self {
        Self::new(Vec::new(), page, size, 0)
    }

    /// Returns true if no further page exists after this one.
    ///
    /// An empty item list is always terminal, regardless of what the remote
    /// pagination metadata claims.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.items.is_empty() || self.page as u64 >= self.total_pages.saturating_sub(1)
    }

    /// Returns the number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
