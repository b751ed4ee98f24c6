use axum::{Router, middleware};
use std::convert::Infallible;
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::{Result, ServerState};
use crate::middleware::log_request;

pub type OneshotResult = std::result::Result<http::Response<axum::body::Body>, Infallible>;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core
        .merge(crate::api::health::router())
        .merge(crate::api::pages::router())
        // Resources
        .merge(crate::api::clientes::router())
        .merge(crate::api::reservas::router())
}

/// HTTP 服务 - 持有绑定了状态的路由
///
/// 同一个路由既用于 [`HttpService::serve`] (真实监听)，
/// 也用于 [`HttpService::oneshot`] (进程内调用，不经过网络栈)。
#[derive(Clone, Debug)]
pub struct HttpService {
    router: Router,
}

impl HttpService {
    pub fn new(state: ServerState) -> Self {
        let router = build_app()
            .with_state(state)
            // Tower HTTP 中间件
            .layer(CorsLayer::permissive())
            .layer(CompressionLayer::new())
            // HTTP 请求日志中间件
            .layer(middleware::from_fn(log_request));

        Self { router }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Process a request without going through the network stack
    pub async fn oneshot(&self, request: http::Request<axum::body::Body>) -> OneshotResult {
        self.router.clone().oneshot(request).await
    }

    /// Serve on `listener` until `shutdown_signal` resolves
    pub async fn serve<F>(&self, listener: TcpListener, shutdown_signal: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal)
            .await?;
        Ok(())
    }
}
