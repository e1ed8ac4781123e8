//! Request ID middleware for correlating logs with requests.
//!
//! Each incoming request gets a UUID v4 and a tracing span wrapping its whole
//! lifecycle, so every log line emitted while the request is being handled
//! carries the same request_id field.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Middleware that wraps each request in a span carrying a fresh request ID.
///
/// This should be the outermost middleware layer so the span covers all other
/// middleware and the handler itself.
pub async fn request_id_layer(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        status = tracing::field::Empty,
        latency_ms = tracing::field::Empty,
    );

    let start = Instant::now();

    async move {
        let response = next.run(request).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        let current = tracing::Span::current();
        current.record("status", response.status().as_u16());
        current.record("latency_ms", latency_ms);
        tracing::info!("Request completed");

        response
    }
    .instrument(span)
    .await
}
