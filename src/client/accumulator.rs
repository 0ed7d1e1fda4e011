//! Filter/page state machine accumulating search pages into one list.

use crate::client::ApiError;
use crate::domain::search::SearchFilters;
use crate::dto::api::{ProcurementRecordDto, RecordSearchRequest, RecordSearchResponse};

/// Page size used by a session unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Immutable snapshot of the filter/page tuple a request was issued for.
///
/// Comparing the key of a resolving response against the key currently in
/// flight is what makes the most recent filter intent win over any older,
/// slower request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestKey {
    pub filters: SearchFilters,
    pub page: usize,
}

/// A request the accumulator has issued and expects to be resolved.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub key: RequestKey,
    pub offset: usize,
    pub limit: usize,
}

impl PageRequest {
    /// Wire request for this page.
    #[must_use]
    pub fn to_search_request(&self) -> RecordSearchRequest {
        RecordSearchRequest {
            text_search: self.key.filters.text_search.clone(),
            buyer_id: self.key.filters.buyer_id.clone(),
            offset: self.offset as i64,
            limit: self.limit as i64,
        }
    }
}

/// Client-side search session state.
///
/// One instance serves one search session: filter changes replace the
/// accumulated list, page advances extend it, failures leave it untouched.
/// At most one request is outstanding at a time.
#[derive(Debug)]
pub struct PageAccumulator {
    filters: SearchFilters,
    page: usize,
    page_size: usize,
    records: Vec<ProcurementRecordDto>,
    reached_end: bool,
    loading: bool,
    last_error: Option<ApiError>,
    in_flight: Option<RequestKey>,
}

impl Default for PageAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl PageAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            filters: SearchFilters::default(),
            page: 1,
            page_size,
            records: Vec::new(),
            reached_end: false,
            loading: false,
            last_error: None,
            in_flight: None,
        }
    }

    /// Issues the initial request for the current filters, first page.
    pub fn start(&mut self) -> PageRequest {
        self.page = 1;
        self.issue()
    }

    /// Applies a new filter set.
    ///
    /// Returns the request to issue, or `None` when the filters are unchanged.
    /// Accumulated records are cleared and pagination resets to page 1; a
    /// request still in flight for the old filters becomes stale and its
    /// response will be discarded on arrival.
    pub fn set_filters(&mut self, filters: SearchFilters) -> Option<PageRequest> {
        if filters == self.filters {
            return None;
        }
        self.filters = filters;
        self.page = 1;
        self.records.clear();
        self.reached_end = false;
        self.last_error = None;
        Some(self.issue())
    }

    /// Advances to the next page.
    ///
    /// Returns `None` while a request is outstanding or once the end of the
    /// result set was reached.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if self.loading || self.reached_end {
            return None;
        }
        self.page += 1;
        Some(self.issue())
    }

    /// Feeds a resolved response back into the machine.
    ///
    /// A response whose key does not match the request currently in flight is
    /// stale (superseded by a filter change) and is dropped; the return value
    /// reports whether the outcome was applied. Page 1 replaces the
    /// accumulated list, later pages append. A failure keeps the accumulated
    /// records visible and rolls the page back so the same page can be
    /// retried.
    pub fn resolve(
        &mut self,
        key: &RequestKey,
        outcome: Result<RecordSearchResponse, ApiError>,
    ) -> bool {
        if self.in_flight.as_ref() != Some(key) {
            return false;
        }
        self.in_flight = None;
        self.loading = false;

        match outcome {
            Ok(response) => {
                if key.page == 1 {
                    self.records = response.records;
                } else {
                    self.records.extend(response.records);
                }
                self.reached_end = response.end_of_results;
                self.last_error = None;
            }
            Err(err) => {
                self.last_error = Some(err);
                if key.page > 1 {
                    self.page = key.page - 1;
                }
            }
        }
        true
    }

    fn issue(&mut self) -> PageRequest {
        let key = RequestKey {
            filters: self.filters.clone(),
            page: self.page,
        };
        self.loading = true;
        self.in_flight = Some(key.clone());
        PageRequest {
            offset: (self.page - 1) * self.page_size,
            limit: self.page_size,
            key,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[ProcurementRecordDto] {
        &self.records
    }

    #[must_use]
    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn reached_end(&self) -> bool {
        self.reached_end
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }
}
