//! # Blog Posts API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    telemetry::init_telemetry(&TelemetryConfig::from_env());

    // Load configuration; missing connection settings are fatal
    let config = AppConfig::from_env().inspect_err(|e| tracing::error!("{}", e))?;

    tracing::info!(
        "Starting blog API server on {}:{}",
        config.host,
        config.port
    );

    let db = blog_infra::database::connect(&config.database)
        .await
        .context("failed to connect to the posts database")?;

    // Build application state
    let state = AppState::new(db.clone());

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    tracing::info!("Server stopped, closing database pool");
    db.close().await.context("failed to close the posts database")?;

    Ok(())
}
