//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::net::SocketAddr;

use crate::core::{Config, Result, ServerError, ServerState};
use crate::services::HttpService;

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Listen address from config
    pub fn addr(&self) -> Result<SocketAddr> {
        let raw = format!("{}:{}", self.config.http_host, self.config.http_port);
        raw.parse()
            .map_err(|_| ServerError::InvalidAddress(raw.clone()))
    }

    pub async fn run(&self) -> Result<()> {
        // Create application state if not provided
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let addr = self.addr()?;
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        tracing::info!("🍽️ Reserva server listening on http://{}", addr);

        let http = HttpService::new(state.clone());
        let result = http.serve(listener, shutdown_signal()).await;

        // 无论服务如何退出都要关闭连接池
        state.shutdown().await;
        tracing::info!("Database pool closed");

        result
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down...");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addr_from_config() {
        let mut config = Config::with_database_path(":memory:");
        config.http_host = "127.0.0.1".into();
        config.http_port = 4321;
        let server = Server::new(config);
        assert_eq!(server.addr().unwrap(), "127.0.0.1:4321".parse().unwrap());
    }

    #[test]
    fn test_invalid_host_is_reported() {
        let mut config = Config::with_database_path(":memory:");
        config.http_host = "not a host".into();
        let server = Server::new(config);
        assert!(matches!(server.addr(), Err(ServerError::InvalidAddress(_))));
    }
}
