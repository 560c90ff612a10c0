//! Read-only aggregates over a user's active records.

use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter};
use serde::Serialize;
use spendwise_core::{EntryKind, IncomeExpenseTotals, ListScope, MonthWindow, TotalBalance};
use utoipa::ToSchema;
use uuid::Uuid;

use super::StoreError;
use super::owned::scoped;
use crate::entities::{accounts, transactions};

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MonthlySummary {
    /// Month as `YYYY-MM`.
    pub month: String,
    /// Sum of income amounts.
    pub income: Decimal,
    /// Sum of expense amounts.
    pub expense: Decimal,
    /// Income minus expense.
    pub net: Decimal,
}

/// Aggregation repository. Archived records never contribute.
#[derive(Debug, Clone)]
pub struct StatsRepository {
    db: DatabaseConnection,
}

impl StatsRepository {
    /// Creates a new stats repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sums the owner's active transactions dated inside `window`.
    pub async fn monthly_income_expense(
        &self,
        owner: Uuid,
        window: MonthWindow,
    ) -> Result<MonthlySummary, StoreError> {
        let rows = scoped::<transactions::Entity>(owner, ListScope::Active)
            .filter(transactions::Column::TransactionDate.gte(window.start))
            .filter(transactions::Column::TransactionDate.lt(window.end))
            .all(&self.db)
            .await?;

        let entries = rows
            .into_iter()
            .map(|row| match row.kind.parse::<EntryKind>() {
                Ok(kind) => Ok((kind, row.amount)),
                Err(_) => Err(StoreError::corrupt("Transaction", row.id, "kind", &row.kind)),
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        let totals = IncomeExpenseTotals::from_entries(entries);
        Ok(MonthlySummary {
            month: window.label(),
            income: totals.income,
            expense: totals.expense,
            net: totals.net(),
        })
    }

    /// Sums the balances of the owner's active accounts, each with its
    /// stored sign.
    pub async fn total_balance(&self, owner: Uuid) -> Result<TotalBalance, StoreError> {
        let accounts = scoped::<accounts::Entity>(owner, ListScope::Active)
            .all(&self.db)
            .await?;

        Ok(TotalBalance::from_balances(
            accounts.into_iter().map(|account| account.balance),
        ))
    }
}
