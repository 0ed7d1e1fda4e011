//! DTOs exposed by the search API endpoints.
//!
//! Field names follow the JSON wire contract (camelCase).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::buyer::Buyer;
use crate::domain::record::ProcurementRecord;

/// Request payload accepted by `POST /api/records`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordSearchRequest {
    #[serde(default)]
    pub text_search: Option<String>,
    #[serde(default)]
    pub buyer_id: Option<String>,
    /// Position of the first record of the page.
    #[validate(range(min = 0, message = "offset negative"))]
    pub offset: i64,
    /// Page size, bounded to protect the storage engine.
    #[validate(range(min = 1, max = 100, message = "limit out of range"))]
    pub limit: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuyerDto {
    pub id: String,
    pub name: String,
}

impl From<Buyer> for BuyerDto {
    fn from(buyer: Buyer) -> Self {
        BuyerDto {
            id: buyer.id,
            name: buyer.name,
        }
    }
}

/// A procurement record as it leaves the service: the buyer reference is
/// always resolved to id and name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementRecordDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub publish_date: NaiveDate,
    pub value: Option<f64>,
    pub currency: Option<String>,
    pub stage: String,
    pub close_date: Option<NaiveDate>,
    pub award_date: Option<NaiveDate>,
    pub buyer: BuyerDto,
}

impl ProcurementRecordDto {
    /// Assembles the wire record from a stored record and its resolved buyer.
    #[must_use]
    pub fn from_record(record: ProcurementRecord, buyer: Buyer) -> Self {
        ProcurementRecordDto {
            id: record.id,
            title: record.title,
            description: record.description,
            publish_date: record.publish_date,
            value: record.value,
            currency: record.currency,
            stage: record.stage.to_string(),
            close_date: record.close_date,
            award_date: record.award_date,
            buyer: buyer.into(),
        }
    }
}

/// Response payload of `POST /api/records`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordSearchResponse {
    pub records: Vec<ProcurementRecordDto>,
    pub end_of_results: bool,
}

/// Response payload of `GET /api/buyers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuyersResponse {
    pub buyers: Vec<BuyerDto>,
}
