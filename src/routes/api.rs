use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::api::RecordSearchRequest;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::{buyers, search};

#[post("/records")]
pub async fn api_records(
    web::Json(request): web::Json<RecordSearchRequest>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match search::search_records(repo.get_ref(), request) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => service_error_response(&err, "Failed to retrieve records."),
    }
}

#[get("/buyers")]
pub async fn api_buyers(repo: web::Data<DieselRepository>) -> impl Responder {
    match buyers::list_buyers(repo.get_ref()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => service_error_response(&err, "Failed to retrieve buyers."),
    }
}
