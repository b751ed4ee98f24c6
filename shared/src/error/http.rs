//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the HTTP status code for this error code
    ///
    /// Business-rule violations (duplicate email, unknown client reference,
    /// past date) are reported as 400 alongside input validation errors.
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::ClienteNotFound | Self::ReservaNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation and business rules)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
