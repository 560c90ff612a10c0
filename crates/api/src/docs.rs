//! OpenAPI document and the Swagger UI serving it at `/api-docs`.

use utoipa::{
    Modify, OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::routes;

/// Where the raw document is served.
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// SpendWise API description.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SpendWise API",
        description = "Personal budget tracker: accounts, categories, transactions, budgets and stats."
    ),
    paths(
        routes::health::health,
        routes::auth::register,
        routes::auth::sign_in,
        routes::auth::sign_out,
        routes::auth::me,
        routes::accounts::list_accounts,
        routes::accounts::list_archived_accounts,
        routes::accounts::get_account,
        routes::accounts::create_account,
        routes::accounts::update_account,
        routes::accounts::archive_account,
        routes::accounts::restore_account,
        routes::accounts::delete_account,
        routes::categories::list_categories,
        routes::categories::list_archived_categories,
        routes::categories::get_category,
        routes::categories::create_category,
        routes::categories::update_category,
        routes::categories::archive_category,
        routes::categories::restore_category,
        routes::categories::delete_category,
        routes::transactions::list_transactions,
        routes::transactions::list_archived_transactions,
        routes::transactions::get_transaction,
        routes::transactions::create_transaction,
        routes::transactions::update_transaction,
        routes::transactions::archive_transaction,
        routes::transactions::restore_transaction,
        routes::transactions::delete_transaction,
        routes::budgets::list_budgets,
        routes::budgets::list_archived_budgets,
        routes::budgets::get_budget,
        routes::budgets::create_budget,
        routes::budgets::update_budget,
        routes::budgets::archive_budget,
        routes::budgets::restore_budget,
        routes::budgets::delete_budget,
        routes::stats::monthly_income_expense,
        routes::stats::total_balance,
    ),
    modifiers(&SessionAuth),
    tags(
        (name = "health", description = "Liveness"),
        (name = "auth", description = "Registration and cookie sessions"),
        (name = "accounts", description = "Money accounts"),
        (name = "categories", description = "Income and expense categories"),
        (name = "transactions", description = "Income and expense entries"),
        (name = "budgets", description = "Per-category spending budgets"),
        (name = "stats", description = "Aggregates over active records"),
    )
)]
pub struct ApiDoc;

/// Registers the two ways a session token can be presented.
struct SessionAuth;

impl Modify for SessionAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("token"))),
        );
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

/// Swagger UI at `/api-docs`, backed by [`OPENAPI_JSON`].
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url(OPENAPI_JSON, ApiDoc::openapi())
}
