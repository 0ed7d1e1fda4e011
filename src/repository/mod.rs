use crate::db::{DbConnection, DbPool};
use crate::domain::buyer::{Buyer, NewBuyer};
use crate::domain::record::{NewRecord, ProcurementRecord};
use crate::domain::search::SearchFilters;
use crate::pagination::SearchPage;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod buyer;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod record;

/// Bounded page query over the procurement catalogue.
///
/// `limit` is the page size the caller will receive; the repository fetches
/// one extra row internally to detect the end of the result set.
#[derive(Debug, Clone)]
pub struct RecordSearchQuery {
    pub filters: SearchFilters,
    pub offset: usize,
    pub limit: usize,
}

impl RecordSearchQuery {
    pub fn new(filters: SearchFilters) -> Self {
        Self {
            filters,
            offset: 0,
            limit: 10,
        }
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

pub trait RecordReader {
    /// Runs a bounded search over the catalogue.
    ///
    /// Rows are ordered by publish date descending with record id ascending
    /// as tiebreaker, so pages are stable across successive requests.
    fn search_records(
        &self,
        query: &RecordSearchQuery,
    ) -> RepositoryResult<SearchPage<ProcurementRecord>>;
}

pub trait RecordWriter {
    fn create_records(&self, new_records: &[NewRecord]) -> RepositoryResult<usize>;
}

pub trait BuyerReader {
    /// Fetches the given buyers in a single batched lookup.
    fn get_buyers_by_ids(&self, ids: &[String]) -> RepositoryResult<Vec<Buyer>>;
    /// Lists each known buyer exactly once, ordered by name.
    fn list_buyers(&self) -> RepositoryResult<Vec<Buyer>>;
}

pub trait BuyerWriter {
    fn create_buyers(&self, new_buyers: &[NewBuyer]) -> RepositoryResult<usize>;
}

/// Diesel-backed implementation of the repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> Result<DbConnection, RepositoryError> {
        Ok(self.pool.get()?)
    }
}
