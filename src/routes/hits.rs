//! Hit counter report. Requests to this endpoint are not counted.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;

/// Body of `GET /hits`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitsResponse {
    pub hits: BTreeMap<String, u64>,
    pub total_hits: u64,
}

#[instrument(name = "hits::report", skip(state))]
pub async fn report(State(state): State<AppState>) -> Json<HitsResponse> {
    let (hits, total_hits) = state.hits.snapshot_with_total();
    Json(HitsResponse { hits, total_hits })
}
