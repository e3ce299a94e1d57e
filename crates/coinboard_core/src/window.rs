/// Rows added to the visible window by each reveal.
pub const PAGE_SIZE: usize = 20;

/// Count of leading rows of the sorted listing that are exposed to the view.
///
/// The value may run past the collection length; callers clamp with
/// [`PaginationWindow::visible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PaginationWindow(usize);

impl PaginationWindow {
    pub fn initial() -> Self {
        Self(PAGE_SIZE)
    }

    pub fn size(self) -> usize {
        self.0
    }

    #[must_use]
    pub fn reveal(self) -> Self {
        Self(self.0.saturating_add(PAGE_SIZE))
    }

    pub fn has_more(self, collection_len: usize) -> bool {
        collection_len > self.0
    }

    pub fn visible(self, collection_len: usize) -> usize {
        self.0.min(collection_len)
    }
}

impl Default for PaginationWindow {
    fn default() -> Self {
        Self::initial()
    }
}
