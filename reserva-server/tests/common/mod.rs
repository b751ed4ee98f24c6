//! Shared helpers for the HTTP integration tests
//!
//! Every test gets its own in-memory database and drives the router in
//! process through `HttpService::oneshot`.

#![allow(dead_code)]

use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use reserva_server::{Config, HttpService, ServerState};
use serde_json::{Value, json};

pub struct TestApp {
    pub state: ServerState,
    pub http: HttpService,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(Config::with_database_path(":memory:")).await
    }

    pub async fn with_config(config: Config) -> Self {
        let state = ServerState::initialize(&config)
            .await
            .expect("in-memory database");
        let http = HttpService::new(state.clone());
        Self { state, http }
    }

    /// Send a request with an optional JSON body, returning status and parsed body
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        self.send(request).await
    }

    /// Send a raw (possibly malformed) JSON body
    pub async fn send_raw(&self, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Fetch a page, returning status, content type and body text
    pub async fn get_text(&self, uri: &str) -> (StatusCode, String, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = self.http.oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.http.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// Create a client and return its id
    pub async fn create_cliente(&self, nome: &str, email: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/clientes",
                json!({ "nome": nome, "email": email, "telefone": "(11) 99999-9999" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["id"].as_i64().unwrap()
    }

    /// Create a reservation for `cliente_id` and return its id
    pub async fn create_reserva(&self, cliente_id: i64, date: &str, time: &str) -> i64 {
        let (status, body) = self
            .post("/api/reservas", reserva_body(cliente_id, date, time))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["id"].as_i64().unwrap()
    }
}

pub fn reserva_body(cliente_id: i64, date: &str, time: &str) -> Value {
    json!({
        "cliente_id": cliente_id,
        "data_reserva": date,
        "hora_reserva": time,
        "numero_pessoas": 4
    })
}

/// `today + days` in the default business time zone (UTC)
pub fn date_from_today(days: i64) -> String {
    (chrono::Utc::now().date_naive() + chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}
