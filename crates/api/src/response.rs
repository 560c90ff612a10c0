//! Response envelope shared by every endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// `{success, message?, data?}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Human-readable outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success carrying data only.
    pub const fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Success carrying a message and data.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

/// `{success, message}` envelope for responses without data, failures included.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiMessage {
    /// Whether the request succeeded.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

impl ApiMessage {
    /// Success carrying a message only.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Failure carrying a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// 200 with data.
pub fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::data(data))).into_response()
}

/// 200 with a message and data.
pub fn ok_with_message<T: Serialize>(message: impl Into<String>, data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::with_message(message, data))).into_response()
}

/// 201 with a message and the created record.
pub fn created<T: Serialize>(message: impl Into<String>, data: T) -> Response {
    (StatusCode::CREATED, Json(ApiResponse::with_message(message, data))).into_response()
}

/// 200 with a message only.
pub fn message(message: impl Into<String>) -> Response {
    (StatusCode::OK, Json(ApiMessage::success(message))).into_response()
}
