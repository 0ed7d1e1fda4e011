use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::record::{
    NewRecord as DomainNewRecord, ProcurementRecord as DomainRecord, TenderStage,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::procurement_records)]
/// Diesel model for [`crate::domain::record::ProcurementRecord`].
pub struct ProcurementRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub buyer_id: String,
    pub publish_date: NaiveDate,
    pub value: Option<f64>,
    pub currency: Option<String>,
    pub stage: String,
    pub close_date: Option<NaiveDate>,
    pub award_date: Option<NaiveDate>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::procurement_records)]
/// Insertable form of [`ProcurementRecord`].
pub struct NewRecord<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub buyer_id: &'a str,
    pub publish_date: NaiveDate,
    pub value: Option<f64>,
    pub currency: Option<&'a str>,
    pub stage: String,
    pub close_date: Option<NaiveDate>,
    pub award_date: Option<NaiveDate>,
}

impl From<ProcurementRecord> for DomainRecord {
    fn from(record: ProcurementRecord) -> Self {
        DomainRecord {
            id: record.id,
            title: record.title,
            description: record.description,
            buyer_id: record.buyer_id,
            publish_date: record.publish_date,
            value: record.value,
            currency: record.currency,
            stage: TenderStage::from(record.stage),
            close_date: record.close_date,
            award_date: record.award_date,
        }
    }
}

impl<'a> From<&'a DomainNewRecord> for NewRecord<'a> {
    fn from(record: &'a DomainNewRecord) -> Self {
        NewRecord {
            id: &record.id,
            title: &record.title,
            description: &record.description,
            buyer_id: &record.buyer_id,
            publish_date: record.publish_date,
            value: record.value,
            currency: record.currency.as_deref(),
            stage: record.stage.to_string(),
            close_date: record.close_date,
            award_date: record.award_date,
        }
    }
}
