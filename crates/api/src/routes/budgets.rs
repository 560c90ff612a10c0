//! Budget management routes.
//!
//! A budget must point at one of the caller's categories.

use axum::{
    Router,
    extract::State,
    response::Response,
    routing::{get, patch},
};
use spendwise_core::{Budget, BudgetPatch, LifecycleAction, ListScope, NewBudget};
use spendwise_db::{BudgetFilter, BudgetRepository};
use uuid::Uuid;

use super::{PeriodQuery, parse_filter};
use crate::{
    AppState,
    error::ApiError,
    extractors::{AppJson, AppPath, AppQuery},
    middleware::AuthUser,
    response::{self, ApiMessage, ApiResponse},
};

/// Creates the budget routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", get(list_budgets).post(create_budget))
        .route("/budgets/archived", get(list_archived_budgets))
        .route(
            "/budgets/{id}",
            get(get_budget).patch(update_budget).delete(delete_budget),
        )
        .route("/budgets/{id}/archive", patch(archive_budget))
        .route("/budgets/{id}/restore", patch(restore_budget))
}

fn repository(state: &AppState) -> BudgetRepository {
    BudgetRepository::new((*state.db).clone())
}

async fn list(
    state: &AppState,
    auth: &AuthUser,
    query: &PeriodQuery,
    scope: ListScope,
) -> Result<Response, ApiError> {
    let filter = BudgetFilter {
        scope,
        period: parse_filter(query.period.as_deref())?,
    };
    let budgets = repository(state).list(auth.user_id(), filter).await?;
    Ok(response::ok(budgets))
}

/// GET /budgets - List active budgets, optionally by `?period=`.
#[utoipa::path(
    get,
    path = "/api/v1/budgets",
    tag = "budgets",
    params(PeriodQuery),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Active budgets, newest first", body = ApiResponse<Vec<Budget>>),
        (status = 400, description = "Unknown filter value", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
    )
)]
pub(crate) async fn list_budgets(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(query): AppQuery<PeriodQuery>,
) -> Result<Response, ApiError> {
    list(&state, &auth, &query, ListScope::Active).await
}

/// GET /budgets/archived - List archived budgets.
#[utoipa::path(
    get,
    path = "/api/v1/budgets/archived",
    tag = "budgets",
    params(PeriodQuery),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Archived budgets, newest first", body = ApiResponse<Vec<Budget>>),
        (status = 400, description = "Unknown filter value", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
    )
)]
pub(crate) async fn list_archived_budgets(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(query): AppQuery<PeriodQuery>,
) -> Result<Response, ApiError> {
    list(&state, &auth, &query, ListScope::Archived).await
}

/// GET /budgets/{id} - Get one budget, archived or not.
#[utoipa::path(
    get,
    path = "/api/v1/budgets/{id}",
    tag = "budgets",
    params(("id" = Uuid, Path, description = "Budget id")),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "The budget", body = ApiResponse<Budget>),
        (status = 400, description = "Malformed id", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Budget not found", body = ApiMessage),
    )
)]
pub(crate) async fn get_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, ApiError> {
    let budget = repository(&state).get(auth.user_id(), id).await?;
    Ok(response::ok(budget))
}

/// POST /budgets - Create a budget.
#[utoipa::path(
    post,
    path = "/api/v1/budgets",
    tag = "budgets",
    request_body = NewBudget,
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 201, description = "Budget created", body = ApiResponse<Budget>),
        (status = 400, description = "Invalid payload", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
    )
)]
pub(crate) async fn create_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(payload): AppJson<NewBudget>,
) -> Result<Response, ApiError> {
    let budget = repository(&state).create(auth.user_id(), payload).await?;
    Ok(response::created("Budget created successfully", budget))
}

/// PATCH /budgets/{id} - Partially update a budget.
#[utoipa::path(
    patch,
    path = "/api/v1/budgets/{id}",
    tag = "budgets",
    params(("id" = Uuid, Path, description = "Budget id")),
    request_body = BudgetPatch,
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Budget updated", body = ApiResponse<Budget>),
        (status = 400, description = "Invalid payload", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Budget not found", body = ApiMessage),
    )
)]
pub(crate) async fn update_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<BudgetPatch>,
) -> Result<Response, ApiError> {
    let budget = repository(&state)
        .update(auth.user_id(), id, payload)
        .await?;
    Ok(response::ok_with_message("Budget updated successfully", budget))
}

/// PATCH /budgets/{id}/archive - Archive a budget.
#[utoipa::path(
    patch,
    path = "/api/v1/budgets/{id}/archive",
    tag = "budgets",
    params(("id" = Uuid, Path, description = "Budget id")),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Budget archived, or already archived", body = ApiResponse<Budget>),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Budget not found", body = ApiMessage),
    )
)]
pub(crate) async fn archive_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, ApiError> {
    let budget = repository(&state).archive(auth.user_id(), id).await?;
    Ok(response::ok_with_message(
        lifecycle_message(LifecycleAction::Archive),
        budget,
    ))
}

/// PATCH /budgets/{id}/restore - Restore an archived budget.
#[utoipa::path(
    patch,
    path = "/api/v1/budgets/{id}/restore",
    tag = "budgets",
    params(("id" = Uuid, Path, description = "Budget id")),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Budget restored, or already active", body = ApiResponse<Budget>),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Budget not found", body = ApiMessage),
    )
)]
pub(crate) async fn restore_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, ApiError> {
    let budget = repository(&state).restore(auth.user_id(), id).await?;
    Ok(response::ok_with_message(
        lifecycle_message(LifecycleAction::Restore),
        budget,
    ))
}

/// DELETE /budgets/{id} - Permanently delete a budget.
#[utoipa::path(
    delete,
    path = "/api/v1/budgets/{id}",
    tag = "budgets",
    params(("id" = Uuid, Path, description = "Budget id")),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Budget deleted", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Budget not found", body = ApiMessage),
    )
)]
pub(crate) async fn delete_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, ApiError> {
    repository(&state).delete(auth.user_id(), id).await?;
    Ok(response::message(lifecycle_message(LifecycleAction::Delete)))
}

fn lifecycle_message(action: LifecycleAction) -> String {
    format!("Budget {} successfully", action.past_tense())
}
