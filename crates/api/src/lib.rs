//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes under `/api/v1`
//! - Cookie/bearer authentication middleware
//! - Request extractors with enveloped rejections
//! - The `{success, message, data}` response envelope
//! - An OpenAPI document with Swagger UI at `/api-docs`

pub mod docs;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod response;
pub mod routes;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use sea_orm::DatabaseConnection;
use spendwise_shared::{CookieConfig, JwtService};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// Session cookie settings.
    pub cookie: Arc<CookieConfig>,
    /// Browser origin allowed to send credentialed requests.
    pub client_url: Option<String>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.client_url.as_deref());

    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .merge(docs::swagger_ui())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS policy: a configured client origin gets credentialed access,
/// otherwise any origin is allowed without credentials.
fn cors_layer(client_url: Option<&str>) -> CorsLayer {
    let Some(origin) = client_url else {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    };

    match origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        Err(e) => {
            tracing::warn!(client_url = %origin, error = %e, "Invalid client_url, allowing any origin");
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}
