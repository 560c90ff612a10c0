//! SpendWise schema migrations.
//!
//! Connects through the same configuration layers as the server
//! (`config/*.toml`, then `SPENDWISE__DATABASE__URL`).
//!
//! ```text
//! migrator [up [N]]   apply pending migrations (all, or the next N)
//! migrator down [N]   roll back the last N migrations (default 1)
//! migrator status     list applied and pending migrations
//! migrator fresh      drop every table, then apply all migrations
//! migrator refresh    roll back everything, then apply all migrations
//! migrator reset      roll back everything
//! ```

use anyhow::{Context, bail};
use sea_orm_migration::{MigratorTrait, sea_orm::DatabaseConnection};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spendwise_db::{connect_with, migration::Migrator};
use spendwise_shared::AppConfig;

/// One migrator invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Up(Option<u32>),
    Down(u32),
    Status,
    Fresh,
    Refresh,
    Reset,
}

impl Command {
    /// Parses the arguments after the program name.
    fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let name = args.next().unwrap_or_else(|| "up".to_string());
        let steps = args
            .next()
            .map(|raw| {
                raw.parse::<u32>()
                    .with_context(|| format!("`{raw}` is not a migration count"))
            })
            .transpose()?;
        if let Some(extra) = args.next() {
            bail!("unexpected argument `{extra}`");
        }

        Ok(match (name.as_str(), steps) {
            ("up", steps) => Self::Up(steps),
            ("down", steps) => Self::Down(steps.unwrap_or(1)),
            ("status", None) => Self::Status,
            ("fresh", None) => Self::Fresh,
            ("refresh", None) => Self::Refresh,
            ("reset", None) => Self::Reset,
            ("status" | "fresh" | "refresh" | "reset", Some(_)) => {
                bail!("`{name}` takes no migration count")
            }
            (other, _) => bail!("unknown command `{other}`"),
        })
    }

    async fn run(self, db: &DatabaseConnection) -> anyhow::Result<()> {
        match self {
            Self::Up(steps) => Migrator::up(db, steps).await?,
            Self::Down(steps) => Migrator::down(db, Some(steps)).await?,
            Self::Status => Migrator::status(db).await?,
            Self::Fresh => Migrator::fresh(db).await?,
            Self::Refresh => Migrator::refresh(db).await?,
            Self::Reset => Migrator::reset(db).await?,
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "migrator=info,sea_orm_migration=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let command = Command::parse(std::env::args().skip(1))?;
    let config = AppConfig::load().context("Failed to load configuration")?;
    let db = connect_with(&config.database)
        .await
        .context("Failed to connect to database")?;

    info!(?command, "Running migrations");
    command.run(&db).await?;
    info!(?command, "Migrations finished");

    Ok(())
}
