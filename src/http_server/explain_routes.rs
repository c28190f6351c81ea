//! Explain HTTP Routes
//!
//! The proxy endpoint: JSON in, `{explanation}` or `{error}` out. All
//! semantics live in the explain service; the handler only extracts and
//! relays.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use crate::explain::{ExplainError, ExplainRequest, ExplainResponse, ExplainService};

// ==================
// Shared State
// ==================

/// Explain state shared across handlers
///
/// Holds the one provider client handle, read-only after construction.
pub struct ExplainState {
    pub service: ExplainService,
}

impl ExplainState {
    pub fn new(service: ExplainService) -> Self {
        Self { service }
    }
}

// ==================
// Explain Routes
// ==================

/// Create explain routes
pub fn explain_routes(state: Arc<ExplainState>) -> Router {
    Router::new()
        .route("/explain", post(explain_handler))
        .with_state(state)
}

async fn explain_handler(
    State(state): State<Arc<ExplainState>>,
    Json(request): Json<ExplainRequest>,
) -> Result<Json<ExplainResponse>, ExplainError> {
    let response = state.service.explain(request).await?;
    Ok(Json(response))
}
