//! Welcome endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub status: String,
}

/// Welcome handler returning the configured greeting.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<WelcomeResponse> {
    state.hits.record("/");

    Json(WelcomeResponse {
        message: state.config.ui.welcome_message.clone(),
        status: "success".to_string(),
    })
}
