//! # HTTP Server
//!
//! Builds the axum router (tickets + health), applies CORS and request
//! tracing, and serves. The storage handle is injected by the caller, which
//! has already connected and prepared the schema; nothing here touches the
//! database before the socket is bound.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::tickets::TicketRepository;

use super::ticket_routes::{ticket_routes, TicketState};

/// HTTP server for the repair-ticket API
pub struct HttpServer {
    config: ServiceConfig,
    router: Router,
}

impl HttpServer {
    /// Assemble the server from configuration and a live storage handle.
    pub fn new(config: ServiceConfig, repo: TicketRepository) -> Self {
        let router = Self::build_router(&config, repo);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServiceConfig, repo: TicketRepository) -> Router {
        let state = Arc::new(TicketState::new(repo));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(ticket_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listening socket and serve until shutdown.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "repair ticket service listening");

        axum::serve(listener, self.router).await
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create health routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
