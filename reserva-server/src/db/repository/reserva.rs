//! Reserva Repository
//!
//! Reads always LEFT JOIN `clientes` so each row carries the client's name
//! and email, or NULLs when the client has been deleted.

use super::{RepoError, RepoResult, Updated};
use shared::models::{Reserva, ReservaData, ReservaStatus};
use shared::util::now_millis;
use sqlx::SqlitePool;

const RESERVA_SELECT: &str = "SELECT r.id, r.cliente_id, r.data_reserva, r.hora_reserva, \
     r.numero_pessoas, r.observacoes, r.status, r.created_at, r.updated_at, \
     c.nome AS cliente_nome, c.email AS cliente_email \
     FROM reservas r LEFT JOIN clientes c ON c.id = r.cliente_id";

/// Latest appointment first
const RESERVA_ORDER: &str = "ORDER BY r.data_reserva DESC, r.hora_reserva DESC, r.id DESC";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Reserva>> {
    let sql = format!("{RESERVA_SELECT} {RESERVA_ORDER}");
    let reservas = sqlx::query_as::<_, Reserva>(&sql).fetch_all(pool).await?;
    Ok(reservas)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Reserva>> {
    let sql = format!("{RESERVA_SELECT} WHERE r.id = ?");
    let reserva = sqlx::query_as::<_, Reserva>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(reserva)
}

pub async fn find_by_cliente_id(pool: &SqlitePool, cliente_id: i64) -> RepoResult<Vec<Reserva>> {
    let sql = format!("{RESERVA_SELECT} WHERE r.cliente_id = ? {RESERVA_ORDER}");
    let reservas = sqlx::query_as::<_, Reserva>(&sql)
        .bind(cliente_id)
        .fetch_all(pool)
        .await?;
    Ok(reservas)
}

pub async fn find_by_status(pool: &SqlitePool, status: ReservaStatus) -> RepoResult<Vec<Reserva>> {
    let sql = format!("{RESERVA_SELECT} WHERE r.status = ? {RESERVA_ORDER}");
    let reservas = sqlx::query_as::<_, Reserva>(&sql)
        .bind(status.as_str())
        .fetch_all(pool)
        .await?;
    Ok(reservas)
}

pub async fn create(pool: &SqlitePool, data: ReservaData) -> RepoResult<Reserva> {
    let now = now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO reservas (cliente_id, data_reserva, hora_reserva, numero_pessoas, observacoes, status, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7) RETURNING id",
    )
    .bind(data.cliente_id)
    .bind(&data.data_reserva)
    .bind(&data.hora_reserva)
    .bind(data.numero_pessoas)
    .bind(&data.observacoes)
    .bind(data.status.as_str())
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create reserva".into()))
}

/// Full replace of the mutable fields; `created_at` is preserved
pub async fn update(pool: &SqlitePool, id: i64, data: ReservaData) -> RepoResult<Updated<Reserva>> {
    let result = sqlx::query(
        "UPDATE reservas SET cliente_id = ?1, data_reserva = ?2, hora_reserva = ?3, numero_pessoas = ?4, \
         observacoes = ?5, status = ?6, updated_at = ?7 WHERE id = ?8",
    )
    .bind(data.cliente_id)
    .bind(&data.data_reserva)
    .bind(&data.hora_reserva)
    .bind(data.numero_pessoas)
    .bind(&data.observacoes)
    .bind(data.status.as_str())
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    let changes = result.rows_affected();
    let record = if changes > 0 {
        find_by_id(pool, id).await?
    } else {
        None
    };
    Ok(Updated { record, changes })
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM reservas WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
