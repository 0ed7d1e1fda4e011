use crate::dto::api::BuyersResponse;
use crate::repository::BuyerReader;
use crate::services::{ServiceError, ServiceResult};

/// Returns each buyer known to the catalogue exactly once, for filter UIs.
pub fn list_buyers<R>(repo: &R) -> ServiceResult<BuyersResponse>
where
    R: BuyerReader + ?Sized,
{
    let buyers = repo.list_buyers().map_err(ServiceError::from)?;
    Ok(BuyersResponse {
        buyers: buyers.into_iter().map(Into::into).collect(),
    })
}
