//! Data models
//!
//! Shared between the server and its API consumers.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod cliente;
pub mod reserva;

// Re-exports
pub use cliente::*;
pub use reserva::*;
