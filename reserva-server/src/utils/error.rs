//! 统一错误处理
//!
//! 错误类型定义在 `shared::error`，这里重新导出并提供响应辅助函数。
//!
//! | 分类 | HTTP | 示例 |
//! |------|------|------|
//! | 输入校验 | 400 | `ID inválido`, `Email inválido` |
//! | 业务规则 | 400 | `Email já cadastrado`, `Data da reserva não pode ser no passado` |
//! | 资源不存在 | 404 | `Cliente não encontrado` |
//! | 系统错误 | 500 | `Erro interno do servidor` + details |
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::new(ErrorCode::ClienteNotFound))
//!
//! // 返回成功响应
//! Ok(ok("Cliente encontrado", cliente))
//! ```

use axum::http::StatusCode;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode, ErrorResponse};

/// Create a 200 response with a message and data
pub fn ok<T>(message: impl Into<String>, data: T) -> ApiResponse<T> {
    ApiResponse::success(message, data)
}

/// Create a 201 response with a message and data
pub fn created<T>(message: impl Into<String>, data: T) -> (StatusCode, ApiResponse<T>) {
    (StatusCode::CREATED, ApiResponse::success(message, data))
}
