use serde::{Deserialize, Serialize};

/// A buying authority referenced by procurement records.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Buyer {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewBuyer {
    pub id: String,
    pub name: String,
}

impl NewBuyer {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
