//! Account management routes.
//!
//! Balances are set directly by the owner; posting a transaction never
//! changes them.

use axum::{
    Router,
    extract::State,
    response::Response,
    routing::{get, patch},
};
use spendwise_core::{Account, AccountPatch, LifecycleAction, ListScope, NewAccount};
use spendwise_db::{AccountFilter, AccountRepository};
use uuid::Uuid;

use super::{TypeQuery, parse_filter};
use crate::{
    AppState,
    error::ApiError,
    extractors::{AppJson, AppPath, AppQuery},
    middleware::AuthUser,
    response::{self, ApiMessage, ApiResponse},
};

/// Creates the account routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route("/accounts/archived", get(list_archived_accounts))
        .route(
            "/accounts/{id}",
            get(get_account).patch(update_account).delete(delete_account),
        )
        .route("/accounts/{id}/archive", patch(archive_account))
        .route("/accounts/{id}/restore", patch(restore_account))
}

fn repository(state: &AppState) -> AccountRepository {
    AccountRepository::new((*state.db).clone())
}

async fn list(
    state: &AppState,
    auth: &AuthUser,
    query: &TypeQuery,
    scope: ListScope,
) -> Result<Response, ApiError> {
    let filter = AccountFilter {
        scope,
        kind: parse_filter(query.kind.as_deref())?,
    };
    let accounts = repository(state).list(auth.user_id(), filter).await?;
    Ok(response::ok(accounts))
}

/// GET /accounts - List active accounts, optionally by `?type=`.
#[utoipa::path(
    get,
    path = "/api/v1/accounts",
    tag = "accounts",
    params(TypeQuery),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Active accounts, newest first", body = ApiResponse<Vec<Account>>),
        (status = 400, description = "Unknown filter value", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
    )
)]
pub(crate) async fn list_accounts(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(query): AppQuery<TypeQuery>,
) -> Result<Response, ApiError> {
    list(&state, &auth, &query, ListScope::Active).await
}

/// GET /accounts/archived - List archived accounts.
#[utoipa::path(
    get,
    path = "/api/v1/accounts/archived",
    tag = "accounts",
    params(TypeQuery),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Archived accounts, newest first", body = ApiResponse<Vec<Account>>),
        (status = 400, description = "Unknown filter value", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
    )
)]
pub(crate) async fn list_archived_accounts(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(query): AppQuery<TypeQuery>,
) -> Result<Response, ApiError> {
    list(&state, &auth, &query, ListScope::Archived).await
}

/// GET /accounts/{id} - Get one account, archived or not.
#[utoipa::path(
    get,
    path = "/api/v1/accounts/{id}",
    tag = "accounts",
    params(("id" = Uuid, Path, description = "Account id")),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "The account", body = ApiResponse<Account>),
        (status = 400, description = "Malformed id", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Account not found", body = ApiMessage),
    )
)]
pub(crate) async fn get_account(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, ApiError> {
    let account = repository(&state).get(auth.user_id(), id).await?;
    Ok(response::ok(account))
}

/// POST /accounts - Create an account.
#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    tag = "accounts",
    request_body = NewAccount,
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 201, description = "Account created", body = ApiResponse<Account>),
        (status = 400, description = "Invalid payload", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
    )
)]
pub(crate) async fn create_account(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(payload): AppJson<NewAccount>,
) -> Result<Response, ApiError> {
    let account = repository(&state).create(auth.user_id(), payload).await?;
    Ok(response::created("Account created successfully", account))
}

/// PATCH /accounts/{id} - Partially update an account.
#[utoipa::path(
    patch,
    path = "/api/v1/accounts/{id}",
    tag = "accounts",
    params(("id" = Uuid, Path, description = "Account id")),
    request_body = AccountPatch,
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Account updated", body = ApiResponse<Account>),
        (status = 400, description = "Invalid payload", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Account not found", body = ApiMessage),
    )
)]
pub(crate) async fn update_account(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<AccountPatch>,
) -> Result<Response, ApiError> {
    let account = repository(&state)
        .update(auth.user_id(), id, payload)
        .await?;
    Ok(response::ok_with_message("Account updated successfully", account))
}

/// PATCH /accounts/{id}/archive - Archive an account.
#[utoipa::path(
    patch,
    path = "/api/v1/accounts/{id}/archive",
    tag = "accounts",
    params(("id" = Uuid, Path, description = "Account id")),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Account archived, or already archived", body = ApiResponse<Account>),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Account not found", body = ApiMessage),
    )
)]
pub(crate) async fn archive_account(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, ApiError> {
    let account = repository(&state).archive(auth.user_id(), id).await?;
    Ok(response::ok_with_message(
        lifecycle_message(LifecycleAction::Archive),
        account,
    ))
}

/// PATCH /accounts/{id}/restore - Restore an archived account.
#[utoipa::path(
    patch,
    path = "/api/v1/accounts/{id}/restore",
    tag = "accounts",
    params(("id" = Uuid, Path, description = "Account id")),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Account restored, or already active", body = ApiResponse<Account>),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Account not found", body = ApiMessage),
    )
)]
pub(crate) async fn restore_account(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, ApiError> {
    let account = repository(&state).restore(auth.user_id(), id).await?;
    Ok(response::ok_with_message(
        lifecycle_message(LifecycleAction::Restore),
        account,
    ))
}

/// DELETE /accounts/{id} - Permanently delete an account.
#[utoipa::path(
    delete,
    path = "/api/v1/accounts/{id}",
    tag = "accounts",
    params(("id" = Uuid, Path, description = "Account id")),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Account deleted", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Account not found", body = ApiMessage),
    )
)]
pub(crate) async fn delete_account(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, ApiError> {
    repository(&state).delete(auth.user_id(), id).await?;
    Ok(response::message(lifecycle_message(LifecycleAction::Delete)))
}

fn lifecycle_message(action: LifecycleAction) -> String {
    format!("Account {} successfully", action.past_tense())
}
