//! HTTP route handlers.
//!
//! Routes are grouped by caching behavior, with per-route Cache-Control
//! headers. The greeting is fixed content and caches aggressively; the health
//! check carries no cache header so liveness probes always reach the process.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod health;
pub mod hello;

use axum::http::header::{HeaderValue, CACHE_CONTROL};
use axum::{middleware, routing::get, Router};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_GREETING;
use crate::middleware::request_id_layer;

/// Creates the axum router with all routes and cache headers.
pub fn create_router() -> Router {
    // Greeting - fixed content, long cache with immutable hint
    let greeting_routes = Router::new()
        .route("/hello", get(hello::hello))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_GREETING),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(greeting_routes)
        .merge(health_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
