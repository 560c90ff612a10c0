//! API route definitions.

use std::str::FromStr;

use axum::{Router, middleware};
use serde::Deserialize;
use spendwise_core::ValidationError;
use utoipa::IntoParams;

use crate::{AppState, middleware::auth_middleware};

pub mod accounts;
pub mod auth;
pub mod budgets;
pub mod categories;
pub mod health;
pub mod stats;
pub mod transactions;

/// Creates the API router with protected routes that need state for middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Protected routes that require authentication
    let protected_routes = Router::new()
        .merge(auth::protected_routes())
        .merge(accounts::routes())
        .merge(categories::routes())
        .merge(transactions::routes())
        .merge(budgets::routes())
        .merge(stats::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine public and protected routes
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(protected_routes)
}

/// `?type=` listing filter.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TypeQuery {
    /// Only records of this type, e.g. `bank` or `expense`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// `?period=` listing filter.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PeriodQuery {
    /// Only budgets with this period: `weekly`, `monthly` or `yearly`.
    pub period: Option<String>,
}

/// Parses an optional filter value; unknown values are validation errors.
fn parse_filter<T>(raw: Option<&str>) -> Result<Option<T>, ValidationError>
where
    T: FromStr<Err = ValidationError>,
{
    raw.map(str::parse).transpose()
}
