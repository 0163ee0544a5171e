//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_files::Files;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Blog API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await?;
    let upload_dir = config.uploads.dir.clone();
    let server_state = state.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::no_store())
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(server_state.clone()))
            .configure(middleware::error::extractor_errors)
            .configure(handlers::configure_routes)
            .service(Files::new("/uploads", upload_dir.clone()))
            .default_service(web::to(handlers::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    tracing::info!("Server stopped");
    state.close().await
}
