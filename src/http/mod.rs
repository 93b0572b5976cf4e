//! HTTP server module.
//!
//! The server includes graceful shutdown on SIGTERM/SIGINT with a
//! configurable connection-draining period, which is what container
//! runtimes send on `stop`.

mod server;
mod shutdown;

pub use server::{listen_addr, start_server, ServerError};
