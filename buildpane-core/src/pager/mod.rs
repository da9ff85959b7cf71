//! Page windowing over fetched collections
//!
//! A [`Paginator`] owns an immutable snapshot of an already-fetched
//! collection and slices it into fixed-size pages. It performs no fetching
//! itself: list views construct one per successful fetch and replace it
//! wholesale when the source collection changes.
//!
//! Navigation never fails. Out-of-range page requests are clamped to the
//! valid range because navigation is driven by UI controls that should
//! degrade gracefully rather than error.
//!
//! # Example
//!
//! ```rust,ignore
//! use buildpane_core::pager::Paginator;
//!
//! let mut pager = Paginator::with_page_size(vec![1, 2, 3, 4, 5], 2)?;
//! assert_eq!(pager.page_count(), 3);
//! pager.next_page();
//! assert_eq!(pager.current_page().items, &[3, 4]);
//! ```

use thiserror::Error;

/// Default page size used when none is configured per view.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Construction errors for [`Paginator`]
///
/// These indicate integration bugs (a misconfigured page size), not runtime
/// conditions, and should be surfaced to developers rather than end users.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PagerError {
    /// Page size must be at least 1
    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(usize),
}

/// A window into a paginated collection
///
/// Borrowed view recomputed on demand from the owning [`Paginator`]; holds
/// no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items visible on the current page
    pub items: &'a [T],

    /// Zero-based index of this page
    pub page_index: usize,

    /// Configured page size (the last page may hold fewer items)
    pub page_size: usize,

    /// Total number of pages (0 for an empty collection)
    pub page_count: usize,

    /// Total number of items across all pages
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Stateful pagination over an immutable collection snapshot
///
/// `current_page_index` is the only mutable state; the collection is fixed
/// for the lifetime of the instance.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
    current_page_index: usize,
}

impl<T> Paginator<T> {
    /// Create a paginator with the default page size
    pub fn new(items: Vec<T>) -> Result<Self, PagerError> {
        Self::with_page_size(items, DEFAULT_PAGE_SIZE)
    }

    /// Create a paginator with an explicit page size
    ///
    /// Fails with [`PagerError::InvalidPageSize`] when `page_size` is 0. An
    /// empty collection is valid and yields a page count of 0.
    pub fn with_page_size(items: Vec<T>, page_size: usize) -> Result<Self, PagerError> {
        if page_size == 0 {
            return Err(PagerError::InvalidPageSize(page_size));
        }
        Ok(Self { items, page_size, current_page_index: 0 })
    }

    /// Total number of items in the underlying collection
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Configured page size
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based index of the current page
    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }

    /// Total number of pages: `ceil(total_items / page_size)`, 0 when empty
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// The current page window
    ///
    /// Pure read; recomputed from the current index and the collection.
    pub fn current_page(&self) -> Page<'_, T> {
        let start = self.current_page_index * self.page_size;
        let end = (start + self.page_size).min(self.items.len());
        // start <= len holds because current_page_index is always in range
        Page {
            items: &self.items[start..end],
            page_index: self.current_page_index,
            page_size: self.page_size,
            page_count: self.page_count(),
            total_items: self.items.len(),
        }
    }

    /// Navigate to a page by index, clamping into the valid range
    ///
    /// No-op on an empty collection. Never fails.
    pub fn go_to_page(&mut self, index: usize) {
        let page_count = self.page_count();
        if page_count == 0 {
            return;
        }
        let clamped = index.min(page_count - 1);
        if clamped != index {
            log::debug!("page index {} clamped to {} (page count {})", index, clamped, page_count);
        }
        self.current_page_index = clamped;
    }

    /// Navigate to the next page, staying on the last page at the boundary
    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page_index.saturating_add(1));
    }

    /// Navigate to the previous page, staying on the first page at the boundary
    pub fn previous_page(&mut self) {
        self.go_to_page(self.current_page_index.saturating_sub(1));
    }

    /// Whether a page exists after the current one
    pub fn has_next(&self) -> bool {
        self.current_page_index + 1 < self.page_count()
    }

    /// Whether a page exists before the current one
    pub fn has_previous(&self) -> bool {
        self.page_count() > 0 && self.current_page_index > 0
    }
}
