//! Cliente Repository

use super::{RepoError, RepoResult, Updated};
use shared::models::{Cliente, ClienteData};
use shared::util::now_millis;
use sqlx::SqlitePool;

const CLIENTE_SELECT: &str =
    "SELECT id, nome, email, telefone, endereco, created_at, updated_at FROM clientes";

/// Newest first; id breaks ties within the same millisecond
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Cliente>> {
    let sql = format!("{CLIENTE_SELECT} ORDER BY created_at DESC, id DESC");
    let clientes = sqlx::query_as::<_, Cliente>(&sql).fetch_all(pool).await?;
    Ok(clientes)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Cliente>> {
    let sql = format!("{CLIENTE_SELECT} WHERE id = ?");
    let cliente = sqlx::query_as::<_, Cliente>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(cliente)
}

/// Exact, case-sensitive match
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Cliente>> {
    let sql = format!("{CLIENTE_SELECT} WHERE email = ? LIMIT 1");
    let cliente = sqlx::query_as::<_, Cliente>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(cliente)
}

pub async fn exists(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM clientes WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

pub async fn create(pool: &SqlitePool, data: ClienteData) -> RepoResult<Cliente> {
    let now = now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO clientes (nome, email, telefone, endereco, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5) RETURNING id",
    )
    .bind(&data.nome)
    .bind(&data.email)
    .bind(&data.telefone)
    .bind(&data.endereco)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create cliente".into()))
}

/// Full replace of the mutable fields; `created_at` is preserved
pub async fn update(pool: &SqlitePool, id: i64, data: ClienteData) -> RepoResult<Updated<Cliente>> {
    let result = sqlx::query(
        "UPDATE clientes SET nome = ?1, email = ?2, telefone = ?3, endereco = ?4, updated_at = ?5 WHERE id = ?6",
    )
    .bind(&data.nome)
    .bind(&data.email)
    .bind(&data.telefone)
    .bind(&data.endereco)
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

/// Returns the number of deleted rows. Reservations are left untouched.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM clientes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::db::DbService;

    async fn pool() -> SqlitePool {
        let db = DbService::new(&Config::with_database_path(":memory:"))
            .await
            .unwrap();
        db.pool
    }

    fn data(nome: &str, email: &str) -> ClienteData {
        ClienteData {
            nome: nome.into(),
            email: email.into(),
            telefone: "11999999999".into(),
            endereco: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = pool().await;
        let created = create(&pool, data("João", "joao@email.com")).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.created_at, created.updated_at);

        let found = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(found, created);

        let by_email = find_by_email(&pool, "joao@email.com").await.unwrap();
        assert_eq!(by_email.map(|c| c.id), Some(created.id));
        assert!(find_by_email(&pool, "JOAO@email.com").await.unwrap().is_none());
        assert!(exists(&pool, created.id).await.unwrap());
        assert!(!exists(&pool, created.id + 1).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_reported() {
        let pool = pool().await;
        create(&pool, data("João", "joao@email.com")).await.unwrap();

        let err = create(&pool, data("Outro", "joao@email.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_find_all_newest_first() {
        let pool = pool().await;
        let a = create(&pool, data("A", "a@x.com")).await.unwrap();
        let b = create(&pool, data("B", "b@x.com")).await.unwrap();

        let ids: Vec<i64> = find_all(&pool).await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let pool = pool().await;
        let created = create(&pool, data("João", "joao@email.com")).await.unwrap();

        let mut new_data = data("João Silva", "joao.silva@email.com");
        new_data.endereco = Some("Rua A, 1".into());
        let updated = update(&pool, created.id, new_data).await.unwrap();

        assert_eq!(updated.changes, 1);
        let record = updated.record.unwrap();
        assert_eq!(record.nome, "João Silva");
        assert_eq!(record.endereco.as_deref(), Some("Rua A, 1"));
        assert_eq!(record.created_at, created.created_at);
        assert!(record.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let pool = pool().await;
        let updated = update(&pool, 999, data("X", "x@x.com")).await.unwrap();
        assert!(updated.is_empty());
        assert!(updated.record.is_none());
    }

    #[tokio::test]
    async fn test_delete_and_ids_not_reused() {
        let pool = pool().await;
        let first = create(&pool, data("A", "a@x.com")).await.unwrap();

        assert_eq!(delete(&pool, first.id).await.unwrap(), 1);
        assert_eq!(delete(&pool, first.id).await.unwrap(), 0);
        assert!(find_by_id(&pool, first.id).await.unwrap().is_none());

        let second = create(&pool, data("A", "a@x.com")).await.unwrap();
        assert!(second.id > first.id);
    }
}
