use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::auth::Subject;

/// Request logging middleware.
///
/// One `api_request` event per request with method, path, status and
/// latency. The authenticated subject is attached when the auth layer
/// resolved one. Bodies and headers are never logged.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let latency_ms = started.elapsed().as_millis() as u64;
    let subject = response
        .extensions()
        .get::<Subject>()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());

    if response.status().is_server_error() {
        tracing::warn!(%method, %path, status, latency_ms, %subject, "api_request");
    } else {
        tracing::info!(%method, %path, status, latency_ms, %subject, "api_request");
    }

    response
}
