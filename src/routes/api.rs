use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::domain::catalog::CatalogKind;
use crate::dto::api::ApiErrorResponse;
use crate::models::config::ServerConfig;
use crate::repository::CatalogReader;
use crate::services::catalog::CATALOG_UNAVAILABLE;
use crate::services::{ServiceError, api};

#[get("/v1/catalog/{kind}")]
pub async fn api_v1_catalog(
    req: HttpRequest,
    kind: web::Path<String>,
    repo: web::Data<dyn CatalogReader>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let kind = match kind.parse::<CatalogKind>() {
        Ok(kind) => kind,
        Err(err) => return error_response(ServiceError::from(err)),
    };

    let query = req.query_string();
    let page_size = server_config.page_size;

    let response = match kind {
        CatalogKind::Anime => api::list_anime(repo.get_ref(), query, page_size)
            .await
            .map(|page| HttpResponse::Ok().json(page)),
        CatalogKind::Products => api::list_products(repo.get_ref(), query, page_size)
            .await
            .map(|page| HttpResponse::Ok().json(page)),
    };

    response.unwrap_or_else(error_response)
}

fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Backend(errors) => {
            HttpResponse::BadGateway().json(ApiErrorResponse { errors })
        }
        ServiceError::Repository(_) => {
            HttpResponse::BadGateway().json(ApiErrorResponse::single(CATALOG_UNAVAILABLE))
        }
        ServiceError::TypeConstraint(message) => {
            HttpResponse::NotFound().json(ApiErrorResponse::single(message))
        }
    }
}
