//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category derived from the code range
///
/// - 0xxx: General errors
/// - 1xxx: Client errors
/// - 2xxx: Reservation errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Cliente,
    Reserva,
    System,
}

impl ErrorCode {
    pub const fn category(&self) -> ErrorCategory {
        match self.code() / 1000 {
            1 => ErrorCategory::Cliente,
            2 => ErrorCategory::Reserva,
            9 => ErrorCategory::System,
            _ => ErrorCategory::General,
        }
    }
}
