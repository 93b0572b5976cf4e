//! HTTP route handlers.
//!
//! Two fixed JSON endpoints plus the hit counter report. Each route group gets
//! its own Cache-Control header; anything unmatched falls through to a JSON 404.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod hits;
pub mod home;

use axum::{extract::OriginalUri, middleware, routing::get, Extension, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_NO_STORE, CACHE_CONTROL_WELCOME};
use crate::error::AppError;
use crate::middleware::{request_id_layer, RequestId};
use crate::state::AppState;

/// Fallback for every unmatched path.
async fn not_found(
    Extension(request_id): Extension<RequestId>,
    OriginalUri(uri): OriginalUri,
) -> AppError {
    tracing::debug!(request_id = %request_id.0, path = %uri.path(), "No route matched");
    AppError::NotFound(uri.path().to_string())
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Welcome - constant content, cacheable
    let home_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_WELCOME),
        ),
    );

    // Health and hit counts - never cached
    let status_routes = Router::new()
        .route("/health", get(health::health))
        .route("/hits", get(hits::report))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    Router::new()
        .merge(home_routes)
        .merge(status_routes)
        .fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
