//! HTTP server module.
//!
//! Plain-HTTP server startup with graceful shutdown on SIGTERM/SIGINT.
//! TLS termination is left to a reverse proxy in front of the service.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
