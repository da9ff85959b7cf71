//! List-view binding
//!
//! A [`ListView`] is the piece of state a list display owns: the field
//! names to render per item and a [`Paginator`] over the most recently
//! fetched collection. It performs no rendering and no fetching; the
//! hosting layer fetches entities, calls [`bind`](ListView::bind), and
//! reads [`page`](ListView::page) when painting.
//!
//! Rebinding replaces the paginator wholesale, resetting navigation to the
//! first page. That is the only refresh semantic a collection has.

use crate::config::PagingConfig;
use crate::pager::{Page, PagerError, Paginator, DEFAULT_PAGE_SIZE};

/// Display state for one paginated entity list
#[derive(Debug, Clone)]
pub struct ListView<T> {
    pager: Option<Paginator<T>>,
    display_fields: Vec<String>,
    page_size: usize,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListView<T> {
    /// Create an unbound view with the default page size
    pub fn new() -> Self {
        Self { pager: None, display_fields: Vec::new(), page_size: DEFAULT_PAGE_SIZE }
    }

    /// Create an unbound view sized from configuration
    pub fn from_config(config: &PagingConfig) -> Self {
        Self { pager: None, display_fields: Vec::new(), page_size: config.default_page_size }
    }

    /// Set the per-item field names the renderer should display
    pub fn with_display_fields<S: Into<String>>(
        mut self,
        fields: impl IntoIterator<Item = S>,
    ) -> Self {
        self.display_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Override the page size for this view
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Bind a freshly fetched collection, replacing any previous one
    pub fn bind(&mut self, items: Vec<T>) -> Result<(), PagerError> {
        self.pager = Some(Paginator::with_page_size(items, self.page_size)?);
        Ok(())
    }

    /// Drop the bound collection (view teardown)
    pub fn unbind(&mut self) {
        self.pager = None;
    }

    /// Whether a collection is currently bound
    pub fn is_bound(&self) -> bool {
        self.pager.is_some()
    }

    /// Field names the renderer should display per item
    pub fn display_fields(&self) -> &[String] {
        &self.display_fields
    }

    /// The current page, when a collection is bound
    pub fn page(&self) -> Option<Page<'_, T>> {
        self.pager.as_ref().map(Paginator::current_page)
    }

    /// Navigate to a page by index; no-op when unbound
    pub fn go_to_page(&mut self, index: usize) {
        if let Some(pager) = self.pager.as_mut() {
            pager.go_to_page(index);
        }
    }

    /// Navigate forward one page; no-op when unbound
    pub fn next_page(&mut self) {
        if let Some(pager) = self.pager.as_mut() {
            pager.next_page();
        }
    }

    /// Navigate back one page; no-op when unbound
    pub fn previous_page(&mut self) {
        if let Some(pager) = self.pager.as_mut() {
            pager.previous_page();
        }
    }

    /// Whether a page exists after the current one
    pub fn has_next(&self) -> bool {
        self.pager.as_ref().is_some_and(Paginator::has_next)
    }

    /// Whether a page exists before the current one
    pub fn has_previous(&self) -> bool {
        self.pager.as_ref().is_some_and(Paginator::has_previous)
    }
}
