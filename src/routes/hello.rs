//! Greeting endpoint.

/// Greeting handler.
///
/// Returns the canonical greeting verbatim. Takes no input, touches no state,
/// and cannot fail; every call yields the same bytes.
pub async fn hello() -> &'static str {
    "Hello, World!"
}
