//! # HTTP Server
//!
//! Main HTTP server combining the page, explain, and health routers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use super::config::HttpServerConfig;
use super::explain_routes::{explain_routes, ExplainState};
use super::frontend::page_routes;
use super::observability_routes::health_routes;

/// HTTP server for the codexplain form and proxy endpoint
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(state: Arc<ExplainState>) -> Self {
        Self::with_config(HttpServerConfig::default(), state)
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, state: Arc<ExplainState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<ExplainState>) -> Router {
        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
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
            // Embedded form at root level
            .merge(page_routes())
            // Health check at root level
            .merge(health_routes())
            // Explain proxy under /api
            .nest("/api", explain_routes(state))
            // Apply CORS middleware
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

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address: {}", e),
            )
        })?;

        println!("Starting codexplain HTTP server on {}", addr);
        println!("Form available at http://{}/", addr);
        println!("Health check: http://{}/health", addr);
        println!("Explain endpoint: POST http://{}/api/explain", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::ExplainService;

    fn test_state() -> Arc<ExplainState> {
        Arc::new(ExplainState::new(ExplainService::unconfigured()))
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(test_state());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_addr() {
        let config = HttpServerConfig::with_addr("127.0.0.1", 3000);
        let server = HttpServer::with_config(config, test_state());
        assert_eq!(server.socket_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new(test_state());
        let _router = server.router();
        // If we get here, router construction succeeded
    }
}
