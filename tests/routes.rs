use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::{
    App,
    http::{StatusCode, header},
    test, web,
};
use serde_json::Value;
use storefront::configure_routes;
use storefront::repository::CatalogReader;
use storefront::services::catalog::CATALOG_UNAVAILABLE;
use tera::Tera;

mod common;

use common::FakeCatalog;

macro_rules! init_app {
    ($catalog:expr) => {{
        let repo: Arc<dyn CatalogReader> = $catalog;
        let tera = Tera::new("templates/**/*").expect("templates parse");

        test::init_service(
            App::new()
                .app_data(web::Data::from(repo))
                .app_data(web::Data::new(tera))
                .app_data(web::Data::new(common::server_config()))
                .configure(configure_routes),
        )
        .await
    }};
}

fn location<B>(resp: &ServiceResponse<B>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

#[actix_web::test]
async fn index_redirects_to_products() {
    let app = init_app!(Arc::new(FakeCatalog::seeded()));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/products");
}

#[actix_web::test]
async fn default_parameters_redirect_to_canonical_url() {
    let catalog = Arc::new(FakeCatalog::seeded());
    let app = init_app!(catalog.clone());

    let req = test::TestRequest::get()
        .uri("/products?q=wig&sort=all&page=1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/products?q=wig");
    assert!(catalog.recorded_queries().is_empty());
}

#[actix_web::test]
async fn malformed_page_redirects_to_first_page() {
    let app = init_app!(Arc::new(FakeCatalog::seeded()));

    let req = test::TestRequest::get()
        .uri("/anime?page=abc&sort=newest")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/anime?sort=newest");
}

#[actix_web::test]
async fn products_page_shows_resolved_prices() {
    let catalog = Arc::new(FakeCatalog::seeded());
    let app = init_app!(catalog.clone());

    let req = test::TestRequest::get().uri("/products?q=wig").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Rem cosplay wig"));
    assert!(body.contains("70.00"));
    assert!(body.contains("Save 30.00"));
    assert!(body.contains("-10%"));

    let queries = catalog.recorded_queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].search.as_deref(), Some("wig"));
    assert_eq!(queries[0].page_size, 12);
}

#[actix_web::test]
async fn products_page_links_to_next_page_with_filter() {
    let app = init_app!(Arc::new(FakeCatalog::seeded()));

    let req = test::TestRequest::get()
        .uri("/products?sort=title-asc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains(r#"href="/products?sort=title-asc&page=2""#));
    assert!(body.contains("Keychain #02"));
}

#[actix_web::test]
async fn anime_page_orders_by_title() {
    let app = init_app!(Arc::new(FakeCatalog::seeded()));

    let req = test::TestRequest::get()
        .uri("/anime?sort=title-asc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    let akira = body.find("Akira").unwrap();
    let frieren = body.find("Frieren").unwrap();
    assert!(akira < frieren);
}

#[actix_web::test]
async fn unreachable_backend_renders_error_and_keeps_filter() {
    let app = init_app!(Arc::new(FakeCatalog::unreachable()));

    let req = test::TestRequest::get()
        .uri("/products?q=figure&page=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains(CATALOG_UNAVAILABLE));
    assert!(body.contains(r#"value="figure""#));
}

#[actix_web::test]
async fn api_lists_products_with_prices() {
    let app = init_app!(Arc::new(FakeCatalog::seeded()));

    let req = test::TestRequest::get()
        .uri("/api/v1/catalog/products?q=wig&page=1&utm_source=mail")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["kind"], "products");
    assert_eq!(body["totalItems"], 1);
    assert_eq!(body["query"], "q=wig");
    assert_eq!(body["items"][0]["finalPrice"], "70.00");
    assert_eq!(body["items"][0]["totalSaved"], "30.00");
    assert_eq!(body["items"][0]["hasEventDiscount"], true);
    assert!(body["items"][0].get("final_price").is_none());
}

#[actix_web::test]
async fn api_pages_anime() {
    let app = init_app!(Arc::new(FakeCatalog::seeded()));

    let req = test::TestRequest::get()
        .uri("/api/v1/catalog/anime?sort=oldest")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["items"][0]["title"], "Akira");
    assert_eq!(body["items"][0]["releaseYear"], 1988);
    assert_eq!(body["query"], "sort=oldest");
}

#[actix_web::test]
async fn api_unknown_catalog_is_not_found() {
    let app = init_app!(Arc::new(FakeCatalog::seeded()));

    let req = test::TestRequest::get()
        .uri("/api/v1/catalog/figures")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn api_unreachable_backend_is_bad_gateway() {
    let app = init_app!(Arc::new(FakeCatalog::unreachable()));

    let req = test::TestRequest::get()
        .uri("/api/v1/catalog/anime")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0], CATALOG_UNAVAILABLE);
}
