//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::buyer::{Buyer, NewBuyer};
use crate::domain::record::{NewRecord, ProcurementRecord};
use crate::pagination::SearchPage;
use crate::repository::errors::RepositoryResult;
use crate::repository::{BuyerReader, BuyerWriter, RecordReader, RecordSearchQuery, RecordWriter};

mock! {
    pub Repository {}

    impl RecordReader for Repository {
        fn search_records(
            &self,
            query: &RecordSearchQuery,
        ) -> RepositoryResult<SearchPage<ProcurementRecord>>;
    }

    impl RecordWriter for Repository {
        fn create_records(&self, new_records: &[NewRecord]) -> RepositoryResult<usize>;
    }

    impl BuyerReader for Repository {
        fn get_buyers_by_ids(&self, ids: &[String]) -> RepositoryResult<Vec<Buyer>>;
        fn list_buyers(&self) -> RepositoryResult<Vec<Buyer>>;
    }

    impl BuyerWriter for Repository {
        fn create_buyers(&self, new_buyers: &[NewBuyer]) -> RepositoryResult<usize>;
    }
}
