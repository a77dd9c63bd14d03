use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::catalog::CatalogKind;
use crate::dto::catalog::{CatalogPage, CatalogPageData};
use crate::models::config::ServerConfig;
use crate::repository::CatalogReader;
use crate::routes::{redirect, render_template, request_url};
use crate::services::catalog::{load_anime_page, load_product_page};

#[get("/")]
pub async fn show_index() -> impl Responder {
    redirect(CatalogKind::Products.page_path())
}

#[get("/anime")]
pub async fn show_anime(
    req: HttpRequest,
    repo: web::Data<dyn CatalogReader>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match load_anime_page(repo.get_ref(), request_url(&req), server_config.page_size).await {
        CatalogPage::Redirect(location) => redirect(&location),
        CatalogPage::Ready(data) => render_catalog(&tera, "catalog/anime.html", &data, &server_config),
    }
}

#[get("/products")]
pub async fn show_products(
    req: HttpRequest,
    repo: web::Data<dyn CatalogReader>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match load_product_page(repo.get_ref(), request_url(&req), server_config.page_size).await {
        CatalogPage::Redirect(location) => redirect(&location),
        CatalogPage::Ready(data) => {
            render_catalog(&tera, "catalog/products.html", &data, &server_config)
        }
    }
}

fn render_catalog<T: Serialize>(
    tera: &Tera,
    template: &str,
    data: &CatalogPageData<T>,
    server_config: &ServerConfig,
) -> HttpResponse {
    let mut context = Context::new();
    context.insert("catalog", data);
    context.insert("current_page", data.kind.as_str());
    context.insert("domain", &server_config.domain);

    render_template(tera, template, &context)
}
