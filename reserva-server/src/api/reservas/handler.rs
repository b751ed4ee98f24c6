//! Reserva API Handlers
//!
//! Create and update run their checks in a fixed order; the first failing
//! check decides the response:
//!
//! 1. required fields
//! 2. `cliente_id` is a positive integer
//! 3. `numero_pessoas` is a positive integer (and within `MAX_PARTY_SIZE`)
//! 4. the referenced client exists (update: after the reservation itself)
//! 5. date format, time format, status
//! 6. date is not in the past (create only)

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::api::extract::{ApiJson, ApiQuery};
use crate::core::ServerState;
use crate::db::repository::{cliente, ensure_deleted, reserva};
use crate::utils::time::{is_valid_time, parse_date, validate_not_past};
use crate::utils::validation::{
    MAX_NOTE_LEN, as_text, is_missing, normalize_optional, parse_id, parse_positive_integer,
    validate_optional_max_len,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, created, ok};
use shared::models::{Reserva, ReservaData, ReservaInput, ReservaStatus};

const MSG_REQUIRED: &str = "Cliente, data, hora e número de pessoas são obrigatórios";
const MSG_INVALID_CLIENTE_ID: &str = "ID do cliente inválido";
const MSG_INVALID_PARTY_SIZE: &str = "Número de pessoas deve ser maior que zero";
const MSG_INVALID_DATE: &str = "Data deve estar no formato YYYY-MM-DD";
const MSG_INVALID_TIME: &str = "Hora deve estar no formato HH:MM";

/// `GET /api/reservas` 查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ReservaFilter {
    pub status: Option<String>,
    pub cliente_id: Option<String>,
}

/// GET /api/reservas - 获取预约列表 (可按状态/客户过滤)
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(filter): ApiQuery<ReservaFilter>,
) -> AppResult<ApiResponse<Vec<Reserva>>> {
    let status = match filter.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(parse_status(raw)?),
    };
    let cliente_id = match filter.cliente_id.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(parse_cliente_id(&serde_json::Value::String(raw.to_string()))?),
    };

    let reservas = match (cliente_id, status) {
        (Some(cliente_id), status) => {
            let mut reservas = reserva::find_by_cliente_id(state.pool(), cliente_id).await?;
            if let Some(status) = status {
                reservas.retain(|r| r.status == status);
            }
            reservas
        }
        (None, Some(status)) => reserva::find_by_status(state.pool(), status).await?,
        (None, None) => reserva::find_all(state.pool()).await?,
    };

    Ok(ok("Reservas encontradas", reservas))
}

/// GET /api/reservas/{id} - 获取单个预约
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Reserva>> {
    let id = parse_id(&id)?;
    let reserva = find_existing(&state, id).await?;
    Ok(ok("Reserva encontrada", reserva))
}

/// POST /api/reservas - 创建预约
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<ReservaInput>,
) -> AppResult<(StatusCode, ApiResponse<Reserva>)> {
    let (cliente_id, numero_pessoas) =
        validate_party(&payload, state.config.max_party_size)?;
    ensure_cliente_exists(&state, cliente_id).await?;

    let (data, date) = validate_schedule(payload, cliente_id, numero_pessoas)?;
    validate_not_past(date, state.today())?;

    let reserva = reserva::create(state.pool(), data).await?;

    tracing::info!(
        reserva_id = reserva.id,
        cliente_id,
        data_reserva = %reserva.data_reserva,
        "Reserva created"
    );
    Ok(created("Reserva criada com sucesso", reserva))
}

/// PUT /api/reservas/{id} - 更新预约 (整体替换，允许过去的日期)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<ReservaInput>,
) -> AppResult<ApiResponse<Reserva>> {
    let id = parse_id(&id)?;
    let (cliente_id, numero_pessoas) =
        validate_party(&payload, state.config.max_party_size)?;

    find_existing(&state, id).await?;
    ensure_cliente_exists(&state, cliente_id).await?;

    let (data, _) = validate_schedule(payload, cliente_id, numero_pessoas)?;

    let updated = reserva::update(state.pool(), id, data).await?;
    let reserva = updated.found(ErrorCode::ReservaNotFound)?;

    tracing::info!(reserva_id = id, "Reserva updated");
    Ok(ok("Reserva atualizada com sucesso", reserva))
}

/// DELETE /api/reservas/{id} - 删除预约
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let id = parse_id(&id)?;
    find_existing(&state, id).await?;

    let rows = reserva::delete(state.pool(), id).await?;
    ensure_deleted(rows, ErrorCode::ReservaNotFound)?;

    tracing::info!(reserva_id = id, "Reserva deleted");
    Ok(ApiResponse::message("Reserva deletada com sucesso"))
}

async fn find_existing(state: &ServerState, id: i64) -> AppResult<Reserva> {
    reserva::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ReservaNotFound))
}

/// 引用的客户不存在是 400 而不是 404
async fn ensure_cliente_exists(state: &ServerState, cliente_id: i64) -> AppResult<()> {
    if !cliente::exists(state.pool(), cliente_id).await? {
        return Err(AppError::new(ErrorCode::ClienteReferenceMissing));
    }
    Ok(())
}

fn parse_cliente_id(value: &serde_json::Value) -> AppResult<i64> {
    parse_positive_integer(value).ok_or_else(|| AppError::validation(MSG_INVALID_CLIENTE_ID))
}

fn parse_status(raw: &str) -> AppResult<ReservaStatus> {
    raw.parse::<ReservaStatus>()
        .map_err(|_| AppError::new(ErrorCode::InvalidStatus))
}

/// Required fields, `cliente_id` and `numero_pessoas`.
///
/// Returns `(cliente_id, numero_pessoas)`.
pub fn validate_party(input: &ReservaInput, max_party_size: Option<i64>) -> AppResult<(i64, i64)> {
    if is_missing(&input.cliente_id)
        || is_missing(&input.data_reserva)
        || is_missing(&input.hora_reserva)
        || is_missing(&input.numero_pessoas)
    {
        return Err(AppError::required(MSG_REQUIRED));
    }

    let cliente_id = input
        .cliente_id
        .as_ref()
        .map(parse_cliente_id)
        .transpose()?
        .ok_or_else(|| AppError::required(MSG_REQUIRED))?;

    let numero_pessoas = input
        .numero_pessoas
        .as_ref()
        .and_then(parse_positive_integer)
        .ok_or_else(|| AppError::validation(MSG_INVALID_PARTY_SIZE))?;

    if let Some(max) = max_party_size
        && numero_pessoas > max
    {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("Número de pessoas não pode ser maior que {max}"),
        ));
    }

    Ok((cliente_id, numero_pessoas))
}

/// Date, time and status formats.
///
/// Date and time are matched exactly as sent (no trimming) and stored as-is.
/// Returns the storable record and the parsed date for the past-date rule.
pub fn validate_schedule(
    input: ReservaInput,
    cliente_id: i64,
    numero_pessoas: i64,
) -> AppResult<(ReservaData, NaiveDate)> {
    let data_reserva = as_text(input.data_reserva.as_ref())
        .ok_or_else(|| AppError::invalid_format(MSG_INVALID_DATE))?;
    let date =
        parse_date(data_reserva).ok_or_else(|| AppError::invalid_format(MSG_INVALID_DATE))?;

    let hora_reserva = as_text(input.hora_reserva.as_ref())
        .filter(|t| is_valid_time(t))
        .ok_or_else(|| AppError::invalid_format(MSG_INVALID_TIME))?;

    let data_reserva = data_reserva.to_string();
    let hora_reserva = hora_reserva.to_string();

    let status = match input.status.as_deref().map(str::trim) {
        None | Some("") => ReservaStatus::default(),
        Some(raw) => parse_status(raw)?,
    };

    let observacoes = normalize_optional(input.observacoes);
    validate_optional_max_len(&observacoes, "Observações", MAX_NOTE_LEN)?;

    let data = ReservaData {
        cliente_id,
        data_reserva,
        hora_reserva,
        numero_pessoas,
        observacoes,
        status,
    };
    Ok((data, date))
}
