//! Overfetch pagination.
//!
//! A page query asks the storage engine for one row more than the caller
//! requested. Receiving that probe row proves more results exist beyond the
//! page, without running a separate count query; the probe row itself is
//! trimmed before the page leaves the repository.

/// One page of search results plus the end-of-results flag.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage<T> {
    pub items: Vec<T>,
    pub end_of_results: bool,
}

impl<T> SearchPage<T> {
    /// Builds a page from rows fetched with `limit + 1`.
    ///
    /// `end_of_results` is true iff the store returned at most `limit` rows,
    /// i.e. there is no row beyond the page being returned. The probe row, if
    /// present, is discarded.
    #[must_use]
    pub fn from_overfetched(mut items: Vec<T>, limit: usize) -> Self {
        let end_of_results = items.len() <= limit;
        items.truncate(limit);
        Self {
            items,
            end_of_results,
        }
    }

}
