use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::record::{NewRecord, ProcurementRecord};
use crate::domain::search::SearchFilters;
use crate::pagination::SearchPage;
use crate::repository::{
    DieselRepository, RecordReader, RecordSearchQuery, RecordWriter, errors::RepositoryResult,
};
use crate::schema::procurement_records;

/// Translates a filter set into a catalogue predicate.
///
/// Free text matches title or description as a case-insensitive substring
/// (SQLite `LIKE`); a buyer filter restricts to that buyer's records; with no
/// filters set the whole catalogue matches.
fn filtered(filters: &SearchFilters) -> procurement_records::BoxedQuery<'static, Sqlite> {
    let mut query = procurement_records::table.into_boxed();

    if let Some(text) = &filters.text_search {
        let pattern = format!("%{text}%");
        query = query.filter(
            procurement_records::title
                .like(pattern.clone())
                .or(procurement_records::description.like(pattern)),
        );
    }

    if let Some(buyer_id) = &filters.buyer_id {
        query = query.filter(procurement_records::buyer_id.eq(buyer_id.clone()));
    }

    query
}

impl RecordReader for DieselRepository {
    fn search_records(
        &self,
        query: &RecordSearchQuery,
    ) -> RepositoryResult<SearchPage<ProcurementRecord>> {
        use crate::models::record::ProcurementRecord as DbRecord;

        let mut conn = self.conn()?;

        // One row past the requested page proves more results exist without
        // a count query; SearchPage trims it back off.
        let rows = filtered(&query.filters)
            .order((
                procurement_records::publish_date.desc(),
                procurement_records::id.asc(),
            ))
            .offset(query.offset as i64)
            .limit(query.limit as i64 + 1)
            .load::<DbRecord>(&mut conn)?;

        let records = rows
            .into_iter()
            .map(Into::into)
            .collect::<Vec<ProcurementRecord>>();

        Ok(SearchPage::from_overfetched(records, query.limit))
    }
}

impl RecordWriter for DieselRepository {
    fn create_records(&self, new_records: &[NewRecord]) -> RepositoryResult<usize> {
        use crate::models::record::NewRecord as DbNewRecord;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewRecord> = new_records.iter().map(Into::into).collect();
        let affected = diesel::insert_into(procurement_records::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
