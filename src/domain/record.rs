use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A procurement record as persisted: the buyer is still a bare foreign key.
///
/// The resolved shape (buyer id and name attached) only exists at the DTO
/// level, produced by the projection step in the search service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProcurementRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub buyer_id: String,
    pub publish_date: NaiveDate,
    pub value: Option<f64>,
    pub currency: Option<String>,
    pub stage: TenderStage,
    pub close_date: Option<NaiveDate>,
    pub award_date: Option<NaiveDate>,
}

/// Lifecycle stage of a procurement record.
///
/// Unknown stages coming from the catalogue are preserved verbatim rather
/// than rejected.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TenderStage {
    Tender,
    Contract,
    Other(String),
}

impl Display for TenderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TenderStage::Tender => write!(f, "TENDER"),
            TenderStage::Contract => write!(f, "CONTRACT"),
            TenderStage::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for TenderStage {
    fn from(s: &str) -> Self {
        match s {
            "TENDER" => TenderStage::Tender,
            "CONTRACT" => TenderStage::Contract,
            _ => TenderStage::Other(s.to_string()),
        }
    }
}

impl From<String> for TenderStage {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub buyer_id: String,
    pub publish_date: NaiveDate,
    pub value: Option<f64>,
    pub currency: Option<String>,
    pub stage: TenderStage,
    pub close_date: Option<NaiveDate>,
    pub award_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_roundtrips_known_values() {
        assert_eq!(TenderStage::from("TENDER"), TenderStage::Tender);
        assert_eq!(TenderStage::from("CONTRACT"), TenderStage::Contract);
        assert_eq!(TenderStage::Tender.to_string(), "TENDER");
        assert_eq!(TenderStage::Contract.to_string(), "CONTRACT");
    }

    #[test]
    fn stage_preserves_unknown_values() {
        let stage = TenderStage::from("PLANNING");
        assert_eq!(stage, TenderStage::Other("PLANNING".to_string()));
        assert_eq!(stage.to_string(), "PLANNING");
    }
}
