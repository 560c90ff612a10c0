//! Test harness: the full router over an in-memory `SQLite` database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sea_orm::{ConnectOptions, Database};
use serde_json::{Value, json};
use spendwise_api::{AppState, create_router};
use spendwise_db::migration::{Migrator, MigratorTrait};
use spendwise_shared::{CookieConfig, JwtConfig, JwtService};
use tower::ServiceExt;

pub const PASSWORD: &str = "correct-horse-battery";

/// Builds the application router backed by a fresh database.
pub async fn spawn_app() -> Router {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.expect("connect to sqlite");
    Migrator::up(&db, None).await.expect("run migrations");

    let state = AppState {
        db: Arc::new(db),
        jwt_service: Arc::new(JwtService::new(JwtConfig {
            secret: "integration-test-secret".to_string(),
            token_expires_secs: 3600,
        })),
        cookie: Arc::new(CookieConfig::default()),
        client_url: None,
    };
    create_router(state)
}

/// A decoded response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    /// `name=value` of the first `Set-Cookie` header, if any.
    pub cookie: Option<String>,
    /// The whole first `Set-Cookie` header, attributes included.
    pub set_cookie: Option<String>,
    pub body: Value,
}

impl TestResponse {
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    pub fn id(&self) -> String {
        self.data()["id"]
            .as_str()
            .expect("response carries an id")
            .to_string()
    }
}

/// Sends one request. `session` is sent as the `Cookie` header.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    session: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(session) = session {
        builder = builder.header(header::COOKIE, session);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let cookie = set_cookie
        .as_deref()
        .and_then(|v| v.split(';').next())
        .map(str::to_string);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        cookie,
        set_cookie,
        body,
    }
}

/// Registers a user and returns the session cookie (`token=...`).
pub async fn register(app: &Router, email: &str) -> String {
    let response = send(
        app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({ "name": "Test User", "email": email, "password": PASSWORD })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.cookie.expect("register sets the session cookie")
}

/// Creates an account and returns its id.
pub async fn create_account(app: &Router, session: &str, name: &str, balance: i64) -> String {
    let response = send(
        app,
        Method::POST,
        "/api/v1/accounts",
        Some(session),
        Some(json!({ "name": name, "type": "bank", "balance": balance })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.id()
}

/// Creates a category and returns its id.
pub async fn create_category(app: &Router, session: &str, name: &str, kind: &str) -> String {
    let response = send(
        app,
        Method::POST,
        "/api/v1/categories",
        Some(session),
        Some(json!({ "name": name, "type": kind })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.id()
}
