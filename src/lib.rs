//! Greeter: a minimal greeting and health-check web service.
//!
//! Exposes two endpoints over plain HTTP: `GET /hello` returning a fixed
//! greeting and `GET /health` returning a liveness status. Requests are
//! wrapped in a tracing span carrying a unique request ID, and the server
//! drains connections gracefully on SIGTERM/SIGINT.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
