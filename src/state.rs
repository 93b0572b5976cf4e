//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::hits::HitCounter;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration and the in-memory hit counter.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub hits: HitCounter,
}

impl AppState {
    /// Creates a new application state with an empty hit counter.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            hits: HitCounter::new(),
        }
    }
}
