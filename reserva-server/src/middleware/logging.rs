//! 访问日志中间件
//!
//! 每个请求一条完成事件 (target `http_access`)，并回写 `x-request-id`。

use axum::{
    extract::{MatchedPath, Request},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Outcome label by status class. Server errors are additionally logged at
/// `error` level where the `AppError` is rendered.
pub fn outcome(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "server_error"
    } else if status.is_client_error() {
        "client_error"
    } else {
        "ok"
    }
}

/// Log one completion event per request.
///
/// The path is the route template (`/api/clientes/{id}`) when one matched.
/// An incoming `x-request-id` is reused, otherwise a UUID is generated.
pub async fn log_request(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let mut response = next.run(req).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    tracing::info!(
        target: "http_access",
        request_id = %request_id,
        %method,
        %path,
        status = status.as_u16(),
        latency_ms,
        outcome = outcome(status),
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
