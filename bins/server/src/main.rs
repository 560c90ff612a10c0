//! SpendWise API Server
//!
//! Main entry point for the SpendWise backend service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spendwise_api::{AppState, create_router};
use spendwise_db::connect_with;
use spendwise_db::migration::{Migrator, MigratorTrait};
use spendwise_shared::{AppConfig, JwtConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spendwise=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to database and bring the schema up to date
    let db = connect_with(&config.database).await?;
    info!("Connected to database");
    Migrator::up(&db, None).await?;
    info!("Migrations applied");

    // Create JWT service
    let jwt_config = JwtConfig {
        secret: config.jwt.secret.clone(),
        token_expires_secs: i64::try_from(config.jwt.token_expiry_secs)
            .context("jwt.token_expiry_secs is out of range")?,
    };
    let jwt_service = JwtService::new(jwt_config);

    if config.cookie.secure {
        info!("Session cookies are Secure with SameSite=None");
    }

    // Create application state
    let state = AppState {
        db: Arc::new(db),
        jwt_service: Arc::new(jwt_service),
        cookie: Arc::new(config.cookie.clone()),
        client_url: config.server.client_url.clone(),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
