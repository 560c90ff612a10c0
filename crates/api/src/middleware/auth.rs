//! Authentication middleware for protected routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use tracing::warn;
use uuid::Uuid;

use crate::{AppState, error::ApiError};
use spendwise_shared::{Claims, JwtError};

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

/// Finds the session token: the cookie first, then an `Authorization: Bearer` header.
fn session_token(request: &Request, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(request.headers());
    if let Some(cookie) = jar.get(cookie_name) {
        return Some(cookie.value().to_string());
    }

    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
        .map(ToString::to_string)
}

/// Authentication middleware that validates JWT tokens.
///
/// This middleware:
/// 1. Reads the token from the session cookie (or a Bearer header)
/// 2. Validates the token using the JWT service
/// 3. Stores the claims in request extensions for handlers to access
///
/// Rejected requests never reach a handler, so no store access happens.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = session_token(&request, &state.cookie.name) else {
        return ApiError::unauthorized("Authentication required").into_response();
    };

    match state.jwt_service.validate_token(&token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => {
            warn!(error = %e, path = %request.uri().path(), "Rejected session token");
            let message = match e {
                JwtError::Expired => "Session has expired",
                _ => "Invalid or malformed token",
            };
            ApiError::unauthorized(message).into_response()
        }
    }
}

/// Extractor for the authenticated user's claims.
///
/// Only valid behind [`auth_middleware`]:
///
/// ```ignore
/// async fn handler(auth: AuthUser) -> impl IntoResponse {
///     let user_id = auth.user_id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the user ID from the claims.
    #[must_use]
    pub fn user_id(&self) -> Uuid {
        self.0.user_id()
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest};
    use rstest::rstest;

    #[rstest]
    #[case("Bearer abc", Some("abc"))]
    #[case("bearer abc", Some("abc"))]
    #[case("Basic abc", None)]
    #[case("abc", None)]
    fn test_extract_bearer_token(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_bearer_token(header), expected);
    }

    #[test]
    fn test_cookie_wins_over_header() {
        let request = HttpRequest::builder()
            .header("cookie", "theme=dark; token=from-cookie")
            .header(AUTHORIZATION, "Bearer from-header")
            .body(Body::empty())
            .unwrap();
        assert_eq!(session_token(&request, "token").as_deref(), Some("from-cookie"));
    }

    #[test]
    fn test_header_fallback() {
        let request = HttpRequest::builder()
            .header(AUTHORIZATION, "Bearer from-header")
            .body(Body::empty())
            .unwrap();
        assert_eq!(session_token(&request, "token").as_deref(), Some("from-header"));

        let request = HttpRequest::builder().body(Body::empty()).unwrap();
        assert_eq!(session_token(&request, "token"), None);
    }
}
