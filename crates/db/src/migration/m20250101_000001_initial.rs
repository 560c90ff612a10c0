//! Initial schema: users and the four owned record tables.
//!
//! Every owned table cascades from `users`. Transactions and budgets keep
//! plain uuid columns for their account/category references.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).text().not_null())
                    .col(timestamp(Users::CreatedAt))
                    .col(timestamp(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Accounts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Accounts::UserId).uuid().not_null())
                    .col(ColumnDef::new(Accounts::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Accounts::Kind).string_len(16).not_null())
                    .col(money(Accounts::Balance))
                    .col(archived_flag(Accounts::IsDeleted))
                    .col(timestamp(Accounts::CreatedAt))
                    .col(timestamp(Accounts::UpdatedAt))
                    .foreign_key(&mut owner_fk(
                        Accounts::Table,
                        Accounts::UserId,
                        "fk_accounts_user",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Categories::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Categories::UserId).uuid().not_null())
                    .col(ColumnDef::new(Categories::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Categories::Kind).string_len(16).not_null())
                    .col(ColumnDef::new(Categories::Description).string_len(500).null())
                    .col(ColumnDef::new(Categories::Color).string_len(7).null())
                    .col(archived_flag(Categories::IsDeleted))
                    .col(timestamp(Categories::CreatedAt))
                    .col(timestamp(Categories::UpdatedAt))
                    .foreign_key(&mut owner_fk(
                        Categories::Table,
                        Categories::UserId,
                        "fk_categories_user",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Transactions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Transactions::UserId).uuid().not_null())
                    .col(ColumnDef::new(Transactions::AccountId).uuid().not_null())
                    .col(ColumnDef::new(Transactions::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(Transactions::Kind).string_len(16).not_null())
                    .col(money(Transactions::Amount))
                    .col(ColumnDef::new(Transactions::Description).string_len(500).null())
                    .col(ColumnDef::new(Transactions::TransactionDate).date().not_null())
                    .col(archived_flag(Transactions::IsDeleted))
                    .col(timestamp(Transactions::CreatedAt))
                    .col(timestamp(Transactions::UpdatedAt))
                    .foreign_key(&mut owner_fk(
                        Transactions::Table,
                        Transactions::UserId,
                        "fk_transactions_user",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Budgets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Budgets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Budgets::UserId).uuid().not_null())
                    .col(ColumnDef::new(Budgets::CategoryId).uuid().not_null())
                    .col(money(Budgets::Amount))
                    .col(ColumnDef::new(Budgets::Period).string_len(16).not_null())
                    .col(ColumnDef::new(Budgets::StartDate).date().not_null())
                    .col(archived_flag(Budgets::IsDeleted))
                    .col(timestamp(Budgets::CreatedAt))
                    .col(timestamp(Budgets::UpdatedAt))
                    .foreign_key(&mut owner_fk(
                        Budgets::Table,
                        Budgets::UserId,
                        "fk_budgets_user",
                    ))
                    .to_owned(),
            )
            .await?;

        // Every listing filters on owner and archived flag.
        manager
            .create_index(owner_index(
                "idx_accounts_owner",
                Accounts::Table,
                Accounts::UserId,
                Accounts::IsDeleted,
            ))
            .await?;
        manager
            .create_index(owner_index(
                "idx_categories_owner",
                Categories::Table,
                Categories::UserId,
                Categories::IsDeleted,
            ))
            .await?;
        manager
            .create_index(owner_index(
                "idx_transactions_owner",
                Transactions::Table,
                Transactions::UserId,
                Transactions::IsDeleted,
            ))
            .await?;
        manager
            .create_index(owner_index(
                "idx_budgets_owner",
                Budgets::Table,
                Budgets::UserId,
                Budgets::IsDeleted,
            ))
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_owner_date")
                    .table(Transactions::Table)
                    .col(Transactions::UserId)
                    .col(Transactions::TransactionDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Budgets::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Transactions::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await
    }
}

fn timestamp<T: Iden + 'static>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

fn money<T: Iden + 'static>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .decimal_len(16, 2)
        .not_null()
        .default(0)
        .to_owned()
}

fn archived_flag<T: Iden + 'static>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .boolean()
        .not_null()
        .default(false)
        .to_owned()
}

fn owner_index<T, C, F>(name: &str, table: T, owner: C, flag: F) -> IndexCreateStatement
where
    T: Iden + 'static,
    C: Iden + 'static,
    F: Iden + 'static,
{
    Index::create()
        .name(name)
        .table(table)
        .col(owner)
        .col(flag)
        .if_not_exists()
        .to_owned()
}

fn owner_fk<T, C>(table: T, column: C, name: &str) -> ForeignKeyCreateStatement
where
    T: Iden + 'static,
    C: Iden + 'static,
{
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(Users::Table, Users::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    UserId,
    Name,
    Kind,
    Balance,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    UserId,
    Name,
    Kind,
    Description,
    Color,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    Id,
    UserId,
    AccountId,
    CategoryId,
    Kind,
    Amount,
    Description,
    TransactionDate,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Budgets {
    Table,
    Id,
    UserId,
    CategoryId,
    Amount,
    Period,
    StartDate,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
