use diesel::prelude::*;

use crate::domain::buyer::{Buyer, NewBuyer};
use crate::repository::{
    BuyerReader, BuyerWriter, DieselRepository, errors::RepositoryResult,
};
use crate::schema::buyers;

impl BuyerReader for DieselRepository {
    fn get_buyers_by_ids(&self, ids: &[String]) -> RepositoryResult<Vec<Buyer>> {
        use crate::models::buyer::Buyer as DbBuyer;

        let mut conn = self.conn()?;
        let rows = buyers::table
            .filter(buyers::id.eq_any(ids))
            .load::<DbBuyer>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_buyers(&self) -> RepositoryResult<Vec<Buyer>> {
        use crate::models::buyer::Buyer as DbBuyer;

        let mut conn = self.conn()?;
        let rows = buyers::table
            .select((buyers::id, buyers::name))
            .distinct()
            .order(buyers::name.asc())
            .load::<DbBuyer>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl BuyerWriter for DieselRepository {
    fn create_buyers(&self, new_buyers: &[NewBuyer]) -> RepositoryResult<usize> {
        use crate::models::buyer::NewBuyer as DbNewBuyer;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewBuyer> = new_buyers.iter().map(Into::into).collect();
        let affected = diesel::insert_into(buyers::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
