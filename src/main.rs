use std::env;

use log::error;
use storefront::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

    let server_config = match ServerConfig::load(&app_env) {
        Ok(server_config) => server_config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    storefront::run(server_config).await
}
