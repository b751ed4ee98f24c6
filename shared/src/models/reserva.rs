//! Reserva Model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Reservation status
///
/// Serialized in lowercase English. The Portuguese spellings used by older
/// front ends (`ativa`, `cancelada`, `concluida`) are accepted on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum ReservaStatus {
    #[default]
    #[serde(alias = "ativa")]
    Active,
    #[serde(alias = "cancelada")]
    Cancelled,
    #[serde(alias = "concluida")]
    Completed,
}

impl ReservaStatus {
    pub const ALL: [ReservaStatus; 3] = [Self::Active, Self::Cancelled, Self::Completed];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ReservaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservaStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "active" | "ativa" => Ok(Self::Active),
            "cancelled" | "cancelada" => Ok(Self::Cancelled),
            "completed" | "concluida" => Ok(Self::Completed),
            other => Err(format!("unknown reservation status: {other}")),
        }
    }
}

/// Reservation row, enriched with the owning client's name and email
///
/// `cliente_nome` / `cliente_email` come from a LEFT JOIN and are `None` when
/// the referenced client no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reserva {
    pub id: i64,
    pub cliente_id: i64,
    /// `YYYY-MM-DD`
    pub data_reserva: String,
    /// `HH:MM`
    pub hora_reserva: String,
    pub numero_pessoas: i64,
    pub observacoes: Option<String>,
    pub status: ReservaStatus,
    pub created_at: i64,
    pub updated_at: i64,
    pub cliente_nome: Option<String>,
    pub cliente_email: Option<String>,
}

/// Raw create/update request body
///
/// `cliente_id` and `numero_pessoas` accept JSON numbers or numeric strings,
/// so they are kept as raw JSON values until validated. The date and time are
/// raw too: a non-string value is a format error, not a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservaInput {
    #[serde(default)]
    pub cliente_id: Option<Value>,
    #[serde(default)]
    pub data_reserva: Option<Value>,
    #[serde(default)]
    pub hora_reserva: Option<Value>,
    #[serde(default)]
    pub numero_pessoas: Option<Value>,
    #[serde(default)]
    pub observacoes: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Validated reservation fields, as written to storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservaData {
    pub cliente_id: i64,
    pub data_reserva: String,
    pub hora_reserva: String,
    pub numero_pessoas: i64,
    pub observacoes: Option<String>,
    pub status: ReservaStatus,
}
