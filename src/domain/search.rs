use serde::{Deserialize, Serialize};

/// Buyer selector value meaning "no buyer filter" in the wire contract.
pub const NO_BUYER_SENTINEL: &str = "0";

/// Filter set applied to a catalogue search.
///
/// Immutable once built; a new filter set always implies a pagination reset
/// on the client side.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchFilters {
    /// Free-text search applied to record title and description.
    pub text_search: Option<String>,
    /// Restrict results to a single buyer.
    pub buyer_id: Option<String>,
}

impl SearchFilters {
    /// Builds a filter set, normalizing blank text and the `"0"` buyer
    /// sentinel to "not filtered".
    #[must_use]
    pub fn new(text_search: Option<String>, buyer_id: Option<String>) -> Self {
        Self {
            text_search: text_search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            buyer_id: buyer_id
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty() && s != NO_BUYER_SENTINEL),
        }
    }

    /// True when no filter is set and the search matches the whole catalogue.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text_search.is_none() && self.buyer_id.is_none()
    }
}
