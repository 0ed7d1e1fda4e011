//! HTTP handlers for the search API.

use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod api;

/// Maps a service failure onto the wire error contract.
///
/// Validation errors carry their message back to the caller; integrity and
/// storage failures are logged with full detail and surfaced as a generic
/// message only.
pub fn service_error_response(err: &ServiceError, generic_message: &str) -> HttpResponse {
    match err {
        ServiceError::InvalidArgument(message) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        ServiceError::DataIntegrity { .. } => {
            log::error!("Data integrity violation: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": generic_message }))
        }
        ServiceError::Unavailable(_) => {
            log::error!("Storage failure: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": generic_message }))
        }
    }
}
