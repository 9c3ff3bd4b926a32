use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::domain::session::Session;
use crate::forms::notices::NoticeListParams;
use crate::repository::http::HttpRepository;
use crate::services::ServiceError;
use crate::services::api as api_service;

#[get("/v1/licitacoes")]
pub async fn api_v1_notices(
    _session: Session,
    params: web::Query<NoticeListParams>,
    repo: web::Data<HttpRepository>,
) -> impl Responder {
    match api_service::list_notices(repo.get_ref(), &params).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Upstream(message)) => {
            HttpResponse::BadGateway().json(json!({ "error": message }))
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}
