//! Shared setup for store integration tests.
//!
//! Each test gets its own in-memory `SQLite` database with the full schema.

#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use spendwise_core::{AccountKind, EntryKind, MonthWindow, NewAccount, NewCategory, NewTransaction};
use spendwise_db::UserRepository;
use spendwise_db::migration::{Migrator, MigratorTrait};
use uuid::Uuid;

/// Opens a fresh migrated database.
pub async fn setup() -> DatabaseConnection {
    // A single connection keeps every query on the same in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await.expect("connect to sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

/// Registers a user and returns its id.
pub async fn create_user(db: &DatabaseConnection, email: &str) -> Uuid {
    UserRepository::new(db.clone())
        .create("Test User", email, "$argon2id$placeholder")
        .await
        .expect("create user")
        .id
}

pub fn new_account(name: &str, kind: AccountKind, balance: Decimal) -> NewAccount {
    NewAccount {
        name: name.to_string(),
        kind,
        balance,
    }
}

pub fn new_category(name: &str, kind: EntryKind) -> NewCategory {
    NewCategory {
        name: name.to_string(),
        kind,
        description: None,
        color: None,
    }
}

pub fn new_transaction(
    account_id: Uuid,
    category_id: Uuid,
    kind: EntryKind,
    amount: Decimal,
    date: NaiveDate,
) -> NewTransaction {
    NewTransaction {
        account_id,
        category_id,
        kind,
        amount,
        description: None,
        date: Some(date),
    }
}

/// First day of the current month.
pub fn this_month() -> NaiveDate {
    MonthWindow::current().start
}

/// Last day of the previous month.
pub fn last_month() -> NaiveDate {
    this_month() - Days::new(1)
}
