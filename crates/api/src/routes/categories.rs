//! Category management routes.

use axum::{
    Router,
    extract::State,
    response::Response,
    routing::{get, patch},
};
use spendwise_core::{Category, CategoryPatch, LifecycleAction, ListScope, NewCategory};
use spendwise_db::{CategoryFilter, CategoryRepository};
use uuid::Uuid;

use super::{TypeQuery, parse_filter};
use crate::{
    AppState,
    error::ApiError,
    extractors::{AppJson, AppPath, AppQuery},
    middleware::AuthUser,
    response::{self, ApiMessage, ApiResponse},
};

/// Creates the category routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/archived", get(list_archived_categories))
        .route(
            "/categories/{id}",
            get(get_category).patch(update_category).delete(delete_category),
        )
        .route("/categories/{id}/archive", patch(archive_category))
        .route("/categories/{id}/restore", patch(restore_category))
}

fn repository(state: &AppState) -> CategoryRepository {
    CategoryRepository::new((*state.db).clone())
}

async fn list(
    state: &AppState,
    auth: &AuthUser,
    query: &TypeQuery,
    scope: ListScope,
) -> Result<Response, ApiError> {
    let filter = CategoryFilter {
        scope,
        kind: parse_filter(query.kind.as_deref())?,
    };
    let categories = repository(state).list(auth.user_id(), filter).await?;
    Ok(response::ok(categories))
}

/// GET /categories - List active categories, optionally by `?type=`.
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "categories",
    params(TypeQuery),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Active categories, newest first", body = ApiResponse<Vec<Category>>),
        (status = 400, description = "Unknown filter value", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
    )
)]
pub(crate) async fn list_categories(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(query): AppQuery<TypeQuery>,
) -> Result<Response, ApiError> {
    list(&state, &auth, &query, ListScope::Active).await
}

/// GET /categories/archived - List archived categories.
#[utoipa::path(
    get,
    path = "/api/v1/categories/archived",
    tag = "categories",
    params(TypeQuery),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Archived categories, newest first", body = ApiResponse<Vec<Category>>),
        (status = 400, description = "Unknown filter value", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
    )
)]
pub(crate) async fn list_archived_categories(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(query): AppQuery<TypeQuery>,
) -> Result<Response, ApiError> {
    list(&state, &auth, &query, ListScope::Archived).await
}

/// GET /categories/{id} - Get one category, archived or not.
#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    tag = "categories",
    params(("id" = Uuid, Path, description = "Category id")),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "The category", body = ApiResponse<Category>),
        (status = 400, description = "Malformed id", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Category not found", body = ApiMessage),
    )
)]
pub(crate) async fn get_category(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, ApiError> {
    let category = repository(&state).get(auth.user_id(), id).await?;
    Ok(response::ok(category))
}

/// POST /categories - Create a category.
#[utoipa::path(
    post,
    path = "/api/v1/categories",
    tag = "categories",
    request_body = NewCategory,
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 201, description = "Category created", body = ApiResponse<Category>),
        (status = 400, description = "Invalid payload", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
    )
)]
pub(crate) async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(payload): AppJson<NewCategory>,
) -> Result<Response, ApiError> {
    let category = repository(&state).create(auth.user_id(), payload).await?;
    Ok(response::created("Category created successfully", category))
}

/// PATCH /categories/{id} - Partially update a category.
#[utoipa::path(
    patch,
    path = "/api/v1/categories/{id}",
    tag = "categories",
    params(("id" = Uuid, Path, description = "Category id")),
    request_body = CategoryPatch,
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<Category>),
        (status = 400, description = "Invalid payload", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Category not found", body = ApiMessage),
    )
)]
pub(crate) async fn update_category(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<CategoryPatch>,
) -> Result<Response, ApiError> {
    let category = repository(&state)
        .update(auth.user_id(), id, payload)
        .await?;
    Ok(response::ok_with_message("Category updated successfully", category))
}

/// PATCH /categories/{id}/archive - Archive a category.
#[utoipa::path(
    patch,
    path = "/api/v1/categories/{id}/archive",
    tag = "categories",
    params(("id" = Uuid, Path, description = "Category id")),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Category archived, or already archived", body = ApiResponse<Category>),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Category not found", body = ApiMessage),
    )
)]
pub(crate) async fn archive_category(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, ApiError> {
    let category = repository(&state).archive(auth.user_id(), id).await?;
    Ok(response::ok_with_message(
        lifecycle_message(LifecycleAction::Archive),
        category,
    ))
}

/// PATCH /categories/{id}/restore - Restore an archived category.
#[utoipa::path(
    patch,
    path = "/api/v1/categories/{id}/restore",
    tag = "categories",
    params(("id" = Uuid, Path, description = "Category id")),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Category restored, or already active", body = ApiResponse<Category>),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Category not found", body = ApiMessage),
    )
)]
pub(crate) async fn restore_category(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, ApiError> {
    let category = repository(&state).restore(auth.user_id(), id).await?;
    Ok(response::ok_with_message(
        lifecycle_message(LifecycleAction::Restore),
        category,
    ))
}

/// DELETE /categories/{id} - Permanently delete a category.
#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    tag = "categories",
    params(("id" = Uuid, Path, description = "Category id")),
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Category deleted", body = ApiMessage),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
        (status = 404, description = "Category not found", body = ApiMessage),
    )
)]
pub(crate) async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, ApiError> {
    repository(&state).delete(auth.user_id(), id).await?;
    Ok(response::message(lifecycle_message(LifecycleAction::Delete)))
}

fn lifecycle_message(action: LifecycleAction) -> String {
    format!("Category {} successfully", action.past_tense())
}
