//! Error codes for the reservation backend
//!
//! Codes are grouped by range:
//! - 0xxx: General errors
//! - 1xxx: Client (cliente) errors
//! - 2xxx: Reservation (reserva) errors
//! - 9xxx: System errors

use std::fmt;

/// Error code enum
///
/// Each code maps to exactly one HTTP status (see [`ErrorCode::http_status`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource already exists (UNIQUE constraint)
    AlreadyExists = 4,
    /// Invalid request (malformed body or query string, bad path segment)
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Cliente ====================
    ClienteNotFound = 1001,
    EmailAlreadyExists = 1002,
    InvalidEmail = 1003,

    // ==================== 2xxx: Reserva ====================
    ReservaNotFound = 2001,
    /// Reservation references a client that does not exist (400, not 404)
    ClienteReferenceMissing = 2002,
    DateInPast = 2003,
    InvalidStatus = 2004,

    // ==================== 9xxx: System ====================
    DatabaseError = 9002,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message used when no custom message is supplied
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Dados inválidos",
            ErrorCode::AlreadyExists => "Recurso já existe",
            ErrorCode::InvalidRequest => "Requisição inválida",
            ErrorCode::InvalidFormat => "Formato inválido",
            ErrorCode::RequiredField => "Campo obrigatório ausente",
            ErrorCode::ValueOutOfRange => "Valor fora do intervalo permitido",

            ErrorCode::ClienteNotFound => "Cliente não encontrado",
            ErrorCode::EmailAlreadyExists => "Email já cadastrado",
            ErrorCode::InvalidEmail => "Email inválido",

            ErrorCode::ReservaNotFound => "Reserva não encontrada",
            ErrorCode::ClienteReferenceMissing => "Cliente não encontrado",
            ErrorCode::DateInPast => "Data da reserva não pode ser no passado",
            ErrorCode::InvalidStatus => "Status inválido",

            ErrorCode::DatabaseError => "Erro interno do servidor",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
