//! 前端页面 (编译期嵌入)
//!
//! | 路径 | 页面 |
//! |------|------|
//! | / | 客户和预约列表 |
//! | /clientes/novo | 新建客户表单 |
//! | /reservas/novo | 新建预约表单 |
//! | /static/style.css | 样式表 |

use axum::{
    Router,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::core::ServerState;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const CLIENTE_FORM_HTML: &str = include_str!("../../static/cliente-form.html");
const RESERVA_FORM_HTML: &str = include_str!("../../static/reserva-form.html");
const STYLE_CSS: &str = include_str!("../../static/style.css");

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(index))
        .route("/clientes/novo", get(cliente_form))
        .route("/reservas/novo", get(reserva_form))
        .route("/static/style.css", get(stylesheet))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn cliente_form() -> Html<&'static str> {
    Html(CLIENTE_FORM_HTML)
}

async fn reserva_form() -> Html<&'static str> {
    Html(RESERVA_FORM_HTML)
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}
