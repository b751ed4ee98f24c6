//! Cliente API Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::extract::ApiJson;
use crate::core::ServerState;
use crate::db::repository::{RepoError, cliente, ensure_deleted, reserva};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, is_blank, is_valid_email,
    normalize_optional, parse_id, validate_max_len, validate_optional_max_len,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, created, ok};
use shared::models::{Cliente, ClienteData, ClienteInput, Reserva};

const MSG_REQUIRED: &str = "Nome, email e telefone são obrigatórios";
const MSG_EMAIL_TAKEN_BY_OTHER: &str = "Email já cadastrado para outro cliente";

/// GET /api/clientes - 获取所有客户 (最新的在前)
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Cliente>>> {
    let clientes = cliente::find_all(state.pool()).await?;
    Ok(ok("Clientes encontrados", clientes))
}

/// GET /api/clientes/{id} - 获取单个客户
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Cliente>> {
    let id = parse_id(&id)?;
    let cliente = find_existing(&state, id).await?;
    Ok(ok("Cliente encontrado", cliente))
}

/// POST /api/clientes - 创建客户
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<ClienteInput>,
) -> AppResult<(StatusCode, ApiResponse<Cliente>)> {
    let data = validate_cliente(payload)?;

    if cliente::find_by_email(state.pool(), &data.email)
        .await?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::EmailAlreadyExists));
    }

    let cliente = cliente::create(state.pool(), data)
        .await
        .map_err(|e| email_conflict(e, ErrorCode::EmailAlreadyExists.message()))?;

    tracing::info!(cliente_id = cliente.id, "Cliente created");
    Ok(created("Cliente criado com sucesso", cliente))
}

/// PUT /api/clientes/{id} - 更新客户 (整体替换)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<ClienteInput>,
) -> AppResult<ApiResponse<Cliente>> {
    let id = parse_id(&id)?;
    let data = validate_cliente(payload)?;

    find_existing(&state, id).await?;

    // 邮箱可以保持不变，但不能和其他客户重复
    if let Some(owner) = cliente::find_by_email(state.pool(), &data.email).await?
        && owner.id != id
    {
        return Err(AppError::with_message(
            ErrorCode::EmailAlreadyExists,
            MSG_EMAIL_TAKEN_BY_OTHER,
        ));
    }

    let updated = cliente::update(state.pool(), id, data)
        .await
        .map_err(|e| email_conflict(e, MSG_EMAIL_TAKEN_BY_OTHER))?;

    // 预检查之后被并发删除
    let cliente = updated.found(ErrorCode::ClienteNotFound)?;

    tracing::info!(cliente_id = id, "Cliente updated");
    Ok(ok("Cliente atualizado com sucesso", cliente))
}

/// DELETE /api/clientes/{id} - 删除客户 (其预约保留)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let id = parse_id(&id)?;
    find_existing(&state, id).await?;

    let rows = cliente::delete(state.pool(), id).await?;
    ensure_deleted(rows, ErrorCode::ClienteNotFound)?;

    tracing::info!(cliente_id = id, "Cliente deleted");
    Ok(ApiResponse::message("Cliente deletado com sucesso"))
}

/// GET /api/clientes/{id}/reservas - 获取客户的所有预约
pub async fn list_reservas(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Vec<Reserva>>> {
    let id = parse_id(&id)?;
    find_existing(&state, id).await?;

    let reservas = reserva::find_by_cliente_id(state.pool(), id).await?;
    Ok(ok("Reservas encontradas", reservas))
}

async fn find_existing(state: &ServerState, id: i64) -> AppResult<Cliente> {
    cliente::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ClienteNotFound))
}

/// UNIQUE(email) 冲突说明两次请求之间邮箱被占用
fn email_conflict(err: RepoError, message: &str) -> AppError {
    match err {
        RepoError::Duplicate(_) => AppError::with_message(ErrorCode::EmailAlreadyExists, message),
        other => other.into(),
    }
}

/// Validate a create/update body into storable client fields.
///
/// `nome`, `telefone` and `endereco` are trimmed; the email is matched and
/// stored exactly as sent. A blank `endereco` is stored as NULL.
pub fn validate_cliente(input: ClienteInput) -> AppResult<ClienteData> {
    if is_blank(&input.nome) || is_blank(&input.email) || is_blank(&input.telefone) {
        return Err(AppError::required(MSG_REQUIRED));
    }

    let email = input.email.unwrap_or_default();
    if !is_valid_email(&email) {
        return Err(AppError::new(ErrorCode::InvalidEmail));
    }

    let nome = input.nome.unwrap_or_default().trim().to_string();
    let telefone = input.telefone.unwrap_or_default().trim().to_string();
    let endereco = normalize_optional(input.endereco).map(|e| e.trim().to_string());

    validate_max_len(&nome, "Nome", MAX_NAME_LEN)?;
    validate_max_len(&email, "Email", MAX_EMAIL_LEN)?;
    validate_max_len(&telefone, "Telefone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_max_len(&endereco, "Endereço", MAX_ADDRESS_LEN)?;

    Ok(ClienteData {
        nome,
        email,
        telefone,
        endereco,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(nome: &str, email: &str, telefone: &str) -> ClienteInput {
        ClienteInput {
            nome: Some(nome.into()),
            email: Some(email.into()),
            telefone: Some(telefone.into()),
            endereco: None,
        }
    }

    #[test]
    fn test_valid_input() {
        let mut raw = input(" João Silva ", "joao@email.com", "(11) 99999-9999");
        raw.endereco = Some("Rua A, 123".into());

        let data = validate_cliente(raw).unwrap();
        assert_eq!(data.nome, "João Silva");
        assert_eq!(data.email, "joao@email.com");
        assert_eq!(data.endereco.as_deref(), Some("Rua A, 123"));
    }

    #[test]
    fn test_missing_fields() {
        let cases = [
            ClienteInput::default(),
            input("", "joao@email.com", "11"),
            input("João", "   ", "11"),
            ClienteInput {
                telefone: None,
                ..input("João", "joao@email.com", "")
            },
        ];
        for raw in cases {
            let err = validate_cliente(raw).unwrap_err();
            assert_eq!(err.message, MSG_REQUIRED);
            assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_required_check_runs_before_email_check() {
        let err = validate_cliente(input("", "email-invalido", "11")).unwrap_err();
        assert_eq!(err.message, MSG_REQUIRED);
    }

    #[test]
    fn test_invalid_email() {
        let err = validate_cliente(input("João", "email-invalido", "11")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidEmail);
        assert_eq!(err.message, "Email inválido");
    }

    #[test]
    fn test_padded_email_is_rejected() {
        let err = validate_cliente(input("João", " joao@email.com ", "11")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidEmail);
    }

    #[test]
    fn test_blank_address_becomes_none() {
        let mut raw = input("João", "joao@email.com", "11");
        raw.endereco = Some("   ".into());
        assert_eq!(validate_cliente(raw).unwrap().endereco, None);
    }

    #[test]
    fn test_name_too_long() {
        let long = "a".repeat(MAX_NAME_LEN + 1);
        let err = validate_cliente(input(&long, "joao@email.com", "11")).unwrap_err();
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        assert!(err.message.starts_with("Nome excede"));
    }

    #[test]
    fn test_duplicate_maps_to_given_message() {
        let err = email_conflict(RepoError::Duplicate("UNIQUE".into()), MSG_EMAIL_TAKEN_BY_OTHER);
        assert_eq!(err.message, MSG_EMAIL_TAKEN_BY_OTHER);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);

        let err = email_conflict(RepoError::Database("disk".into()), MSG_EMAIL_TAKEN_BY_OTHER);
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.details.as_deref(), Some("disk"));
    }
}
