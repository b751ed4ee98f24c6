use shared::error::AppError;
use std::net::SocketAddr;
use thiserror::Error;

/// 服务器启动/运行错误
///
/// 请求级别的错误使用 [`AppError`]；这里只包含进程级别的失败。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("无效的监听地址: {0}")]
    InvalidAddress(String),

    #[error("无法绑定 {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("存储初始化失败: {0}")]
    Storage(#[from] AppError),

    #[error("服务器 I/O 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
