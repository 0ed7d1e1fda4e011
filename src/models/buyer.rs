use diesel::prelude::*;

use crate::domain::buyer::{Buyer as DomainBuyer, NewBuyer as DomainNewBuyer};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::buyers)]
/// Diesel model for [`crate::domain::buyer::Buyer`].
pub struct Buyer {
    pub id: String,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::buyers)]
/// Insertable form of [`Buyer`].
pub struct NewBuyer<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

impl From<Buyer> for DomainBuyer {
    fn from(buyer: Buyer) -> Self {
        DomainBuyer {
            id: buyer.id,
            name: buyer.name,
        }
    }
}

impl<'a> From<&'a DomainNewBuyer> for NewBuyer<'a> {
    fn from(buyer: &'a DomainNewBuyer) -> Self {
        NewBuyer {
            id: &buyer.id,
            name: &buyer.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buyer_into_domain() {
        let db_buyer = Buyer {
            id: "B-1".to_string(),
            name: "Ministry of Works".to_string(),
        };
        let domain: DomainBuyer = db_buyer.into();
        assert_eq!(domain.id, "B-1");
        assert_eq!(domain.name, "Ministry of Works");
    }

    #[test]
    fn from_domain_new_creates_newbuyer() {
        let domain = DomainNewBuyer::new("B-2", "City Council");
        let new: NewBuyer = (&domain).into();
        assert_eq!(new.id, domain.id);
        assert_eq!(new.name, domain.name);
    }
}
