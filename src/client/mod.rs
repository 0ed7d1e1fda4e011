//! Client-side search session building blocks.
//!
//! [`accumulator::PageAccumulator`] owns the filter/page state machine and
//! the growing result list; the transport behind [`SearchApi`] is supplied by
//! the embedding application. Responses may resolve out of order relative to
//! issuance, so every request carries the key it was issued for and the
//! accumulator discards responses whose key is no longer current.

use thiserror::Error;

use crate::dto::api::{BuyerDto, BuyersResponse, RecordSearchRequest, RecordSearchResponse};

pub mod accumulator;

pub use accumulator::{DEFAULT_PAGE_SIZE, PageAccumulator, PageRequest, RequestKey};

/// Failures reported by a [`SearchApi`] transport.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never reached the server or the connection broke.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Transport seam between the accumulator and the search server.
#[cfg_attr(feature = "test-mocks", mockall::automock)]
pub trait SearchApi {
    fn search_records(
        &self,
        request: &RecordSearchRequest,
    ) -> Result<RecordSearchResponse, ApiError>;

    fn list_buyers(&self) -> Result<BuyersResponse, ApiError>;
}

/// One-shot buyer list load for filter dropdowns.
///
/// The embedding component calls this explicitly during initialization; it is
/// not issued implicitly on module load.
pub fn load_buyer_options<A>(api: &A) -> Result<Vec<BuyerDto>, ApiError>
where
    A: SearchApi + ?Sized,
{
    Ok(api.list_buyers()?.buyers)
}

/// Executes a page request against the transport and feeds the outcome back
/// into the accumulator. Returns whether the outcome was applied (a stale
/// response is dropped and reports `false`).
pub fn dispatch<A>(accumulator: &mut PageAccumulator, api: &A, request: &PageRequest) -> bool
where
    A: SearchApi + ?Sized,
{
    let outcome = api.search_records(&request.to_search_request());
    accumulator.resolve(&request.key, outcome)
}
