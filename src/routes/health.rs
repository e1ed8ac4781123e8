//! Health check endpoint for container orchestration.
//!
//! A liveness probe consumed by Kubernetes, systemd, and load balancers to
//! verify the service is alive.

/// Health check handler.
///
/// Returns a fixed "OK" body when the process is running. This only checks
/// that the process can answer HTTP; there are no dependencies to probe.
pub async fn health() -> &'static str {
    "OK"
}
