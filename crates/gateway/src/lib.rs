//! API Gateway Library
//!
//! This crate provides the HTTP REST API over the user directory: bearer
//! token resolution, realm admin checks, and the confirmation mail query.

pub mod auth;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use directory_service_lib::{infra::Database, DirectoryStore};

use crate::auth::JwtAuthenticator;
use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server on the given address.
pub async fn run_server(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = GatewayConfig::from_env();
    run_server_with_config(host, port, config).await
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(
    host: &str,
    port: u16,
    config: GatewayConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Connect to the user directory (schema is managed by directory-service)
    let db = Database::connect_without_migrations(&config.database).await?;
    let directory = Arc::new(DirectoryStore::new(db.get_connection()));

    // Token verification
    let authenticator = Arc::new(JwtAuthenticator::from_config(&config)?);
    info!("Serving realm '{}' (issuer {})", config.realm, config.expected_issuer());

    // Create app state
    let state = AppState::new(authenticator, directory, config);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
