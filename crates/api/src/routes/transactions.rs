//! Transaction management routes.
//!
//! Listings come back newest first by transaction date. Account and category
//! references are checked against the caller's own records.

use axum::{
    Router,
    extract::State,
    response::Response,
    routing::{get, patch},
};
use spendwise_core::{LifecycleAction, ListScope, NewTransaction, Transaction, TransactionPatch};
use spendwise_db::{TransactionFilter, TransactionRepository};
use uuid::Uuid;

use super::{TypeQuery, parse_filter};
use crate::{
    AppState,
    error::ApiError,
    extractors::{AppJson, AppPath, AppQuery},
    middleware::AuthUser,
    response::{self, ApiMessage, ApiResponse},
};

/// Creates the transaction routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions).post(create_transaction))
        .route("/transactions/archived", get(list_archived_transactions))
        .route(
            "/transactions/{id}",
            get(get_transaction).patch(update_transaction).delete(delete_transaction),
        )
        .route("/transactions/{id}/archive", patch(archive_transaction))
        .route("/transactions/{id}/restore", patch(restore_transaction))
}

fn repository(state: &AppState) -> TransactionRepository {
    TransactionRepository::new((*state.db).clone())
}

async fn list(
    state: &AppState,
    auth: &AuthUser,
    query: &TypeQuery,
    scope: ListScope,
) -> Result<Response, ApiError> {
    let filter = TransactionFilter {
        scope,
        kind: parse_filter(query.kind.as_deref())?,
    };
    let transactions = repository(state).list(auth.user_id(), filter).await?;
    Ok(response::ok(transactions))
}

/// GET /transactions - List active transactions, optionally by `?type=`.
#[utoipa::path(
    get,
    path = "/api/v1/transactions",
    tag = "transactions",
    params(TypeQuery),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Active transactions, by date, newest first", body = ApiResponse<Vec<Transaction>>),
        (status = 400, description = "Unknown filter value", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
    )
)]
pub(crate) async fn list_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(query): AppQuery<TypeQuery>,
) -> Result<Response, ApiError> {
    list(&state, &auth, &query, ListScope::Active).await
}

/// GET /transactions/archived - List archived transactions.
#[utoipa::path(
    get,
    path = "/api/v1/transactions/archived",
    tag = "transactions",
    params(TypeQuery),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Archived transactions, by date, newest first", body = ApiResponse<Vec<Transaction>>),
        (status = 400, description = "Unknown filter value", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
    )
)]
pub(crate) async fn list_archived_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(query): AppQuery<TypeQuery>,
) -> Result<Response, ApiError> {
    list(&state, &auth, &query, ListScope::Archived).await
}

/// GET /transactions/{id} - Get one transaction, archived or not.
#[utoipa::path(
    get,
    path = "/api/v1/transactions/{id}",
    tag = "transactions",
    params(("id" = Uuid, Path, description = "Transaction id")),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "The transaction", body = ApiResponse<Transaction>),
        (status = 400, description = "Malformed id", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Transaction not found", body = ApiMessage),
    )
)]
pub(crate) async fn get_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, ApiError> {
    let transaction = repository(&state).get(auth.user_id(), id).await?;
    Ok(response::ok(transaction))
}

/// POST /transactions - Create a transaction.
#[utoipa::path(
    post,
    path = "/api/v1/transactions",
    tag = "transactions",
    request_body = NewTransaction,
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 201, description = "Transaction created", body = ApiResponse<Transaction>),
        (status = 400, description = "Invalid payload", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
    )
)]
pub(crate) async fn create_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(payload): AppJson<NewTransaction>,
) -> Result<Response, ApiError> {
    let transaction = repository(&state).create(auth.user_id(), payload).await?;
    Ok(response::created("Transaction created successfully", transaction))
}

/// PATCH /transactions/{id} - Partially update a transaction.
#[utoipa::path(
    patch,
    path = "/api/v1/transactions/{id}",
    tag = "transactions",
    params(("id" = Uuid, Path, description = "Transaction id")),
    request_body = TransactionPatch,
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Transaction updated", body = ApiResponse<Transaction>),
        (status = 400, description = "Invalid payload", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Transaction not found", body = ApiMessage),
    )
)]
pub(crate) async fn update_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<TransactionPatch>,
) -> Result<Response, ApiError> {
    let transaction = repository(&state)
        .update(auth.user_id(), id, payload)
        .await?;
    Ok(response::ok_with_message("Transaction updated successfully", transaction))
}

/// PATCH /transactions/{id}/archive - Archive a transaction.
#[utoipa::path(
    patch,
    path = "/api/v1/transactions/{id}/archive",
    tag = "transactions",
    params(("id" = Uuid, Path, description = "Transaction id")),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Transaction archived, or already archived", body = ApiResponse<Transaction>),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Transaction not found", body = ApiMessage),
    )
)]
pub(crate) async fn archive_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, ApiError> {
    let transaction = repository(&state).archive(auth.user_id(), id).await?;
    Ok(response::ok_with_message(
        lifecycle_message(LifecycleAction::Archive),
        transaction,
    ))
}

/// PATCH /transactions/{id}/restore - Restore an archived transaction.
#[utoipa::path(
    patch,
    path = "/api/v1/transactions/{id}/restore",
    tag = "transactions",
    params(("id" = Uuid, Path, description = "Transaction id")),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Transaction restored, or already active", body = ApiResponse<Transaction>),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Transaction not found", body = ApiMessage),
    )
)]
pub(crate) async fn restore_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, ApiError> {
    let transaction = repository(&state).restore(auth.user_id(), id).await?;
    Ok(response::ok_with_message(
        lifecycle_message(LifecycleAction::Restore),
        transaction,
    ))
}

/// DELETE /transactions/{id} - Permanently delete a transaction.
#[utoipa::path(
    delete,
    path = "/api/v1/transactions/{id}",
    tag = "transactions",
    params(("id" = Uuid, Path, description = "Transaction id")),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Transaction deleted", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Transaction not found", body = ApiMessage),
    )
)]
pub(crate) async fn delete_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, ApiError> {
    repository(&state).delete(auth.user_id(), id).await?;
    Ok(response::message(lifecycle_message(LifecycleAction::Delete)))
}

fn lifecycle_message(action: LifecycleAction) -> String {
    format!("Transaction {} successfully", action.past_tense())
}
