//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK whenever the process can
//! answer HTTP. Used by Docker HEALTHCHECK, Kubernetes and load balancers.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Health check handler.
///
/// This is a liveness probe only: it checks nothing beyond the process
/// being able to respond.
#[instrument(name = "health::health", skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    state.hits.record("/health");
    Json(HealthResponse::healthy())
}
