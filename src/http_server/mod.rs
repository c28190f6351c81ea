//! # codexplain HTTP Server Module
//!
//! Combines the embedded web page, the explain proxy endpoint, and the
//! health check into a unified Axum server.
//!
//! # Endpoints
//!
//! - `/` - Embedded single-page form
//! - `/health` - Health check
//! - `/api/explain` - Code explanation proxy

pub mod config;
pub mod explain_routes;
pub mod frontend;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use explain_routes::ExplainState;
pub use server::HttpServer;
