//! 请求提取器
//!
//! 替代 axum 自带的 `Json` / `Query`，拒绝时统一返回错误信封。

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::utils::AppError;

pub const MSG_INVALID_JSON: &str = "JSON inválido";
pub const MSG_INVALID_QUERY: &str = "Parâmetros de consulta inválidos";

/// Drop-in replacement for `Json<T>` whose rejection is the standard error
/// envelope: 400 `{error: "JSON inválido", details}`.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                AppError::invalid_request(MSG_INVALID_JSON).with_details(rejection.body_text())
            })?;
        Ok(ApiJson(value))
    }
}

/// Query string counterpart of [`ApiJson`]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(value) =
            axum::extract::Query::<T>::from_request_parts(parts, state)
                .await
                .map_err(|rejection: QueryRejection| {
                    tracing::debug!(error = %rejection.body_text(), "Rejected query string");
                    AppError::invalid_request(MSG_INVALID_QUERY)
                        .with_details(rejection.body_text())
                })?;
        Ok(ApiQuery(value))
    }
}
