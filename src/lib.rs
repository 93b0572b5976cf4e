//! dockdemo: a minimal containerized web service.
//!
//! Exposes a welcome message at `/`, a liveness probe at `/health` and an
//! in-memory hit counter at `/hits`.

pub mod config;
pub mod error;
pub mod hits;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use routes::create_router;
pub use state::AppState;
