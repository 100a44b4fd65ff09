//! Request metrics middleware.
//! Times every request and records it under its matched route.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};

use crate::http::request::request_id;
use crate::observability::metrics;

/// Route label for requests that hit the fallback.
const UNMATCHED: &str = "unmatched";

pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED.to_owned());
    let id = request_id(req.headers()).to_owned();

    let response = next.run(req).await;
    let status = response.status();

    metrics::record_request(&route, status.as_u16(), start);

    if status.is_server_error() {
        tracing::warn!(request_id = %id, route = %route, status = %status, "Request failed");
    } else {
        tracing::debug!(
            request_id = %id,
            route = %route,
            status = %status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );
    }

    response
}
