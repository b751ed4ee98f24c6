//! Unified error system
//!
//! - [`ErrorCode`]: error codes, each mapped to an HTTP status
//! - [`ErrorCategory`]: classification of codes by range
//! - [`AppError`]: error with code, message and optional details
//! - [`ApiResponse`] / [`ErrorResponse`]: the JSON envelopes
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Default message for the code
//! let err = AppError::new(ErrorCode::ClienteNotFound);
//! assert_eq!(err.message, "Cliente não encontrado");
//!
//! // Storage failure with diagnostic details
//! let err = AppError::database("database is locked");
//! assert_eq!(err.details.as_deref(), Some("database is locked"));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{ApiResponse, AppError, AppResult, ErrorResponse};
