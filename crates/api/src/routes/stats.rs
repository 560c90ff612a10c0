//! Aggregate views over the caller's active records.

use axum::{Router, extract::State, response::Response, routing::get};
use spendwise_core::{MonthWindow, TotalBalance};
use spendwise_db::{MonthlySummary, StatsRepository};

use crate::{
    AppState,
    error::ApiError,
    middleware::AuthUser,
    response::{self, ApiMessage, ApiResponse},
};

/// Creates the stats routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stats/monthly/income-expense", get(monthly_income_expense))
        .route("/stats/total-balance", get(total_balance))
}

/// GET /stats/monthly/income-expense - Current month's income and expense.
#[utoipa::path(
    get,
    path = "/api/v1/stats/monthly/income-expense",
    tag = "stats",
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Totals over active transactions dated this month", body = ApiResponse<MonthlySummary>),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
    )
)]
pub(crate) async fn monthly_income_expense(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Response, ApiError> {
    let summary = StatsRepository::new((*state.db).clone())
        .monthly_income_expense(auth.user_id(), MonthWindow::current())
        .await?;
    Ok(response::ok(summary))
}

/// GET /stats/total-balance - Sum of active account balances.
#[utoipa::path(
    get,
    path = "/api/v1/stats/total-balance",
    tag = "stats",
    security(("session_cookie" = []), ("bearer" = [])),
    responses(
        (status = 200, description = "Signed sum over active accounts", body = ApiResponse<TotalBalance>),
        (status = 401, description = "Missing or invalid session", body = ApiMessage),
    )
)]
pub(crate) async fn total_balance(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Response, ApiError> {
    let total = StatsRepository::new((*state.db).clone())
        .total_balance(auth.user_id())
        .await?;
    Ok(response::ok(total))
}
