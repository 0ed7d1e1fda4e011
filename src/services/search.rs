use std::collections::HashMap;

use validator::{Validate, ValidationErrors};

use crate::domain::buyer::Buyer;
use crate::domain::record::ProcurementRecord;
use crate::domain::search::SearchFilters;
use crate::dto::api::{ProcurementRecordDto, RecordSearchRequest, RecordSearchResponse};
use crate::repository::{BuyerReader, RecordReader, RecordSearchQuery};
use crate::services::{ServiceError, ServiceResult};

/// Runs a bounded catalogue search and resolves every record's buyer.
///
/// Validation happens before any query executes; the buyer lookup is a
/// single batched fetch regardless of page size.
pub fn search_records<R>(
    repo: &R,
    request: RecordSearchRequest,
) -> ServiceResult<RecordSearchResponse>
where
    R: RecordReader + BuyerReader + ?Sized,
{
    request
        .validate()
        .map_err(|errors| ServiceError::InvalidArgument(validation_message(&errors)))?;

    let filters = SearchFilters::new(request.text_search, request.buyer_id);
    let query = RecordSearchQuery::new(filters)
        .offset(request.offset as usize)
        .limit(request.limit as usize);

    let page = repo.search_records(&query).map_err(ServiceError::from)?;
    let records = project_records(repo, page.items)?;

    Ok(RecordSearchResponse {
        records,
        end_of_results: page.end_of_results,
    })
}

/// Attaches the resolved buyer to each record.
///
/// The whole batch fails if any record points at a buyer the store does not
/// know; the wire contract guarantees `buyer` is always populated.
fn project_records<R>(
    repo: &R,
    records: Vec<ProcurementRecord>,
) -> ServiceResult<Vec<ProcurementRecordDto>>
where
    R: BuyerReader + ?Sized,
{
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let mut buyer_ids: Vec<String> = records.iter().map(|r| r.buyer_id.clone()).collect();
    buyer_ids.sort();
    buyer_ids.dedup();

    let buyers = repo.get_buyers_by_ids(&buyer_ids).map_err(ServiceError::from)?;
    let buyers_by_id: HashMap<String, Buyer> =
        buyers.into_iter().map(|b| (b.id.clone(), b)).collect();

    records
        .into_iter()
        .map(|record| match buyers_by_id.get(&record.buyer_id) {
            Some(buyer) => Ok(ProcurementRecordDto::from_record(record, buyer.clone())),
            None => Err(ServiceError::DataIntegrity {
                record_id: record.id,
                buyer_id: record.buyer_id,
            }),
        })
        .collect()
}

fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_values()
        .flat_map(|field| field.iter())
        .filter_map(|err| err.message.clone())
        .map(|m| m.into_owned())
        .collect();
    messages.sort();
    messages.join("; ")
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::NaiveDate;

    use super::*;
    use crate::pagination::SearchPage;
    use crate::repository::errors::{RepositoryError, RepositoryResult};

    /// In-memory stand-in for the storage engine: holds the full matching
    /// result set and serves overfetched pages from it.
    #[derive(Default)]
    struct StubRepo {
        records: Vec<ProcurementRecord>,
        buyers: Vec<Buyer>,
        fail_search: bool,
        fail_buyers: bool,
        last_query: RefCell<Option<RecordSearchQuery>>,
    }

    impl RecordReader for StubRepo {
        fn search_records(
            &self,
            query: &RecordSearchQuery,
        ) -> RepositoryResult<SearchPage<ProcurementRecord>> {
            if self.fail_search {
                return Err(RepositoryError::ConnectionError("pool exhausted".into()));
            }
            self.last_query.replace(Some(query.clone()));
            let fetched: Vec<ProcurementRecord> = self
                .records
                .iter()
                .skip(query.offset)
                .take(query.limit + 1)
                .cloned()
                .collect();
            Ok(SearchPage::from_overfetched(fetched, query.limit))
        }
    }

    impl BuyerReader for StubRepo {
        fn get_buyers_by_ids(&self, ids: &[String]) -> RepositoryResult<Vec<Buyer>> {
            if self.fail_buyers {
                return Err(RepositoryError::ConnectionError("pool exhausted".into()));
            }
            Ok(self
                .buyers
                .iter()
                .filter(|b| ids.contains(&b.id))
                .cloned()
                .collect())
        }

        fn list_buyers(&self) -> RepositoryResult<Vec<Buyer>> {
            Ok(self.buyers.clone())
        }
    }

    fn buyer(id: &str) -> Buyer {
        Buyer {
            id: id.to_string(),
            name: format!("Buyer {id}"),
        }
    }

    fn record(id: &str, buyer_id: &str) -> ProcurementRecord {
        ProcurementRecord {
            id: id.to_string(),
            title: format!("Record {id}"),
            description: "".to_string(),
            buyer_id: buyer_id.to_string(),
            publish_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            value: Some(1000.0),
            currency: Some("GBP".to_string()),
            stage: crate::domain::record::TenderStage::Tender,
            close_date: None,
            award_date: None,
        }
    }

    fn request(offset: i64, limit: i64) -> RecordSearchRequest {
        RecordSearchRequest {
            text_search: None,
            buyer_id: None,
            offset,
            limit,
        }
    }

    fn seeded(count: usize) -> StubRepo {
        StubRepo {
            records: (0..count).map(|i| record(&format!("R-{i:02}"), "B-1")).collect(),
            buyers: vec![buyer("B-1")],
            ..StubRepo::default()
        }
    }

    #[test]
    fn rejects_limit_out_of_range() {
        let repo = seeded(3);
        for limit in [0, -1, 101] {
            let result = search_records(&repo, request(0, limit));
            match result {
                Err(ServiceError::InvalidArgument(msg)) => {
                    assert_eq!(msg, "limit out of range")
                }
                other => panic!("limit {limit} produced {other:?}"),
            }
        }
        // No query may run on invalid input.
        assert!(repo.last_query.borrow().is_none());
    }

    #[test]
    fn rejects_negative_offset() {
        let repo = seeded(3);
        let result = search_records(&repo, request(-1, 10));
        match result {
            Err(ServiceError::InvalidArgument(msg)) => assert_eq!(msg, "offset negative"),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn accepts_limit_bounds() {
        let repo = seeded(3);
        assert!(search_records(&repo, request(0, 1)).is_ok());
        assert!(search_records(&repo, request(0, 100)).is_ok());
    }

    #[test]
    fn empty_store_returns_empty_end_of_results() {
        let repo = StubRepo {
            buyers: vec![buyer("B-1")],
            ..StubRepo::default()
        };
        let response = search_records(&repo, request(0, 10)).unwrap();
        assert!(response.records.is_empty());
        assert!(response.end_of_results);
    }

    #[test]
    fn fifteen_records_paginate_in_two_pages() {
        let repo = seeded(15);

        let first = search_records(&repo, request(0, 10)).unwrap();
        assert_eq!(first.records.len(), 10);
        assert!(!first.end_of_results);

        let second = search_records(&repo, request(10, 10)).unwrap();
        assert_eq!(second.records.len(), 5);
        assert!(second.end_of_results);
    }

    #[test]
    fn every_record_carries_resolved_buyer() {
        let repo = seeded(5);
        let response = search_records(&repo, request(0, 10)).unwrap();
        assert_eq!(response.records.len(), 5);
        for record in &response.records {
            assert_eq!(record.buyer.id, "B-1");
            assert_eq!(record.buyer.name, "Buyer B-1");
        }
    }

    #[test]
    fn dangling_buyer_fails_whole_projection() {
        let mut repo = seeded(3);
        repo.records.push(record("R-99", "B-GONE"));
        let result = search_records(&repo, request(0, 10));
        match result {
            Err(ServiceError::DataIntegrity {
                record_id,
                buyer_id,
            }) => {
                assert_eq!(record_id, "R-99");
                assert_eq!(buyer_id, "B-GONE");
            }
            other => panic!("expected DataIntegrity, got {other:?}"),
        }
    }

    #[test]
    fn storage_failure_maps_to_unavailable() {
        let repo = StubRepo {
            fail_search: true,
            ..StubRepo::default()
        };
        let result = search_records(&repo, request(0, 10));
        assert!(matches!(result, Err(ServiceError::Unavailable(_))));
    }

    #[test]
    fn buyer_lookup_failure_maps_to_unavailable() {
        let repo = StubRepo {
            records: vec![record("R-1", "B-1")],
            fail_buyers: true,
            ..StubRepo::default()
        };
        let result = search_records(&repo, request(0, 10));
        assert!(matches!(result, Err(ServiceError::Unavailable(_))));
    }

    #[test]
    fn buyer_sentinel_is_normalized_before_querying() {
        let repo = seeded(1);
        let request = RecordSearchRequest {
            text_search: Some("  ".to_string()),
            buyer_id: Some("0".to_string()),
            offset: 0,
            limit: 10,
        };
        search_records(&repo, request).unwrap();

        let query = repo.last_query.borrow().clone().unwrap();
        assert!(query.filters.is_empty());
    }
}
