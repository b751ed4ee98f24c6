//! Shared types for the reservation backend
//!
//! Data models, error types and response envelopes used by the server and
//! by anything that talks to its HTTP API.

pub mod error;
pub mod models;
pub mod util;

pub use error::{ApiResponse, AppError, AppResult, ErrorCode, ErrorResponse};
