use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::services::metrics;

/// Record count and latency for every response, labelled by method, path,
/// and status.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status().as_u16().to_string();

    metrics::record_http_request(&method, &path, &status, duration.as_secs_f64());

    response
}
