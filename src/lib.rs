#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
pub use server::{configure_routes, run};

#[cfg(feature = "server")]
mod server {
    use std::sync::Arc;

    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::models::config::ServerConfig;
    use crate::repository::{CatalogReader, HttpCatalogRepository};
    use crate::routes::api::api_v1_catalog;
    use crate::routes::catalog::{show_anime, show_index, show_products};

    /// Registers every storefront route. Handlers expect `web::Data` for
    /// `dyn CatalogReader`, `Tera` and `ServerConfig`.
    pub fn configure_routes(cfg: &mut web::ServiceConfig) {
        cfg.service(web::scope("/api").service(api_v1_catalog))
            .service(show_index)
            .service(show_anime)
            .service(show_products);
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let repo = HttpCatalogRepository::new(
            server_config.backend_url.clone(),
            server_config.request_timeout(),
        )
        .map_err(|e| std::io::Error::other(format!("Failed to build catalog client: {e}")))?;
        let repo: Arc<dyn CatalogReader> = Arc::new(repo);
        let repo = web::Data::from(repo);

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Serving storefront on {}:{} against {}",
            bind_address.0,
            bind_address.1,
            server_config.backend_url
        );

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", "./assets"))
                .configure(configure_routes)
                .app_data(repo.clone())
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
