use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use stockroom::db::{establish_connection_pool, run_migrations};
use stockroom::models::config::ServerConfig;
use stockroom::repository::DieselRepository;
use stockroom::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let server_config = match ServerConfig::load(&app_env) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match run_migrations(&pool) {
        Ok(0) => log::info!("Database schema is up to date"),
        Ok(applied) => log::info!("Applied {applied} migration(s)"),
        Err(e) => {
            log::error!("Failed to prepare database schema: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Starting server on {}:{} with database {}",
        server_config.address,
        server_config.port,
        server_config.database_url
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
