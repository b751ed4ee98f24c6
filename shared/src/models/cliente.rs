//! Cliente Model

use serde::{Deserialize, Serialize};

/// Client entity (table `clientes`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Cliente {
    pub id: i64,
    pub nome: String,
    /// Unique across all clients (exact, case-sensitive)
    pub email: String,
    pub telefone: String,
    pub endereco: Option<String>,
    /// Unix millis
    pub created_at: i64,
    /// Unix millis, refreshed on every update
    pub updated_at: i64,
}

/// Raw create/update request body
///
/// Every field is optional so that missing fields surface as a validation
/// error instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClienteInput {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub endereco: Option<String>,
}

/// Validated client fields, as written to storage (full replace on update)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClienteData {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub endereco: Option<String>,
}
