//! Authentication routes: register, sign-in, sign-out and the current user.
//!
//! The session token travels in an HTTP-only cookie; the response bodies
//! only carry the user profile.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use spendwise_core::auth::{hash_password, normalize_email, validate_registration, verify_password};
use spendwise_db::{UserRepository, entities::users};
use spendwise_shared::{
    AppError, CookieConfig,
    auth::{RegisterRequest, SignInRequest, UserInfo},
};
use tracing::{error, info, warn};

use crate::{
    AppState,
    error::ApiError,
    extractors::AppJson,
    middleware::AuthUser,
    response::{self, ApiMessage, ApiResponse},
};

/// Public auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/sign-in", post(sign_in))
        .route("/auth/sign-out", post(sign_out))
}

/// Auth routes behind the auth middleware.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(me))
}

fn user_info(user: users::Model) -> UserInfo {
    UserInfo {
        id: user.id,
        name: user.name,
        email: user.email,
    }
}

/// Builds the session cookie. Production cookies are `Secure` and
/// `SameSite=None` so a separately hosted client can send them.
fn session_cookie(config: &CookieConfig, token: String) -> Cookie<'static> {
    let same_site = if config.secure {
        SameSite::None
    } else {
        SameSite::Lax
    };

    Cookie::build((config.name.clone(), token))
        .http_only(true)
        .path("/")
        .secure(config.secure)
        .same_site(same_site)
        .build()
}

/// Issues a token for `user` and attaches it to the jar.
fn sign_session(state: &AppState, jar: CookieJar, user: &users::Model) -> Result<CookieJar, ApiError> {
    let token = state.jwt_service.generate_token(user.id).map_err(|e| {
        error!(error = %e, user_id = %user.id, "Failed to generate session token");
        ApiError(AppError::Internal(e.to_string()))
    })?;

    Ok(jar.add(session_cookie(&state.cookie, token)))
}

/// POST /auth/register - Register a new user and start a session.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registered; the session cookie is set", body = ApiResponse<UserInfo>),
        (status = 400, description = "Invalid name, email or password", body = ApiMessage),
        (status = 409, description = "Email already registered", body = ApiMessage),
    )
)]
pub(crate) async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<Response, ApiError> {
    validate_registration(&payload.name, &payload.email, &payload.password)?;
    let email = normalize_email(&payload.email);

    let password_hash = hash_password(&payload.password).map_err(|e| {
        error!(error = %e, "Failed to hash password");
        ApiError(AppError::Internal(e.to_string()))
    })?;

    let user = UserRepository::new((*state.db).clone())
        .create(&payload.name, &email, &password_hash)
        .await?;

    let jar = sign_session(&state, jar, &user)?;
    info!(user_id = %user.id, "User registered and signed in");

    Ok((
        StatusCode::CREATED,
        jar,
        Json(ApiResponse::with_message(
            "User registered successfully",
            user_info(user),
        )),
    )
        .into_response())
}

/// POST /auth/sign-in - Check credentials and start a session.
#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-in",
    tag = "auth",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in; the session cookie is set", body = ApiResponse<UserInfo>),
        (status = 400, description = "Invalid email or password", body = ApiMessage),
    )
)]
pub(crate) async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(payload): AppJson<SignInRequest>,
) -> Result<Response, ApiError> {
    let invalid = || ApiError(AppError::Validation("Invalid email or password".to_string()));
    let email = normalize_email(&payload.email);

    let user = UserRepository::new((*state.db).clone())
        .find_by_email(&email)
        .await
        .map_err(|e| ApiError(AppError::Database(e.to_string())))?;

    let Some(user) = user else {
        info!(email = %email, "Sign-in attempt for non-existent user");
        return Err(invalid());
    };

    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            warn!(user_id = %user.id, "Failed sign-in attempt - invalid password");
            return Err(invalid());
        }
        Err(e) => {
            error!(error = %e, user_id = %user.id, "Password verification error");
            return Err(ApiError(AppError::Internal(e.to_string())));
        }
    }

    let jar = sign_session(&state, jar, &user)?;
    info!(user_id = %user.id, "User signed in");

    Ok((
        jar,
        Json(ApiResponse::with_message(
            "Signed in successfully",
            user_info(user),
        )),
    )
        .into_response())
}

/// Expires the session cookie with the attributes it was issued with, so
/// browsers match and drop it.
fn clear_session(config: &CookieConfig, jar: CookieJar) -> CookieJar {
    jar.remove(session_cookie(config, String::new()))
}

/// POST /auth/sign-out - Clear the session cookie.
#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-out",
    tag = "auth",
    responses(
        (status = 200, description = "Session cookie expired", body = ApiMessage),
    )
)]
pub(crate) async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> Response {
    let jar = clear_session(&state.cookie, jar);
    (jar, Json(ApiMessage::success("Signed out successfully"))).into_response()
}

/// GET /auth/me - Current user's profile.
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "auth",
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "The signed-in user", body = ApiResponse<UserInfo>),
        (status = 401, description = "Missing or invalid session, or the user is gone", body = ApiMessage),
    )
)]
pub(crate) async fn me(State(state): State<AppState>, auth: AuthUser) -> Result<Response, ApiError> {
    let user = UserRepository::new((*state.db).clone())
        .find_by_id(auth.user_id())
        .await
        .map_err(|e| ApiError(AppError::Database(e.to_string())))?;

    // A token can outlive its user.
    let user = user.ok_or_else(|| ApiError::unauthorized("User no longer exists"))?;
    Ok(response::ok(user_info(user)))
}
