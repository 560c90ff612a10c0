//! Budget repository.

use chrono::Local;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder, Set};
use spendwise_core::{Budget, BudgetPatch, BudgetPeriod, LifecycleAction, ListScope, NewBudget};
use tracing::info;
use uuid::Uuid;

use super::StoreError;
use super::owned::{apply_lifecycle, ensure_reference, find_owned, into_records, now, scoped};
use crate::entities::{budgets, categories};

/// Narrows a budget listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetFilter {
    /// Archived or active half.
    pub scope: ListScope,
    /// Only budgets with this period.
    pub period: Option<BudgetPeriod>,
}

/// Budget repository scoped to an owner.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a budget for one of the owner's categories. The start date
    /// defaults to today.
    pub async fn create(&self, owner: Uuid, input: NewBudget) -> Result<Budget, StoreError> {
        input.validate()?;
        ensure_reference::<categories::Entity>(&self.db, owner, input.category_id, "category_id")
            .await?;

        let now = now();
        let model = budgets::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner),
            category_id: Set(input.category_id),
            amount: Set(input.amount),
            period: Set(input.period.as_str().to_string()),
            start_date: Set(input.start_date.unwrap_or_else(|| Local::now().date_naive())),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        info!(budget_id = %model.id, user_id = %owner, period = %input.period, "Budget created");
        model.try_into()
    }

    /// Fetches a budget whatever its archived state.
    pub async fn get(&self, owner: Uuid, id: Uuid) -> Result<Budget, StoreError> {
        find_owned::<budgets::Entity>(&self.db, owner, id)
            .await?
            .try_into()
    }

    /// Lists budgets, newest first.
    pub async fn list(&self, owner: Uuid, filter: BudgetFilter) -> Result<Vec<Budget>, StoreError> {
        let mut query = scoped::<budgets::Entity>(owner, filter.scope);
        if let Some(period) = filter.period {
            query = query.filter(budgets::Column::Period.eq(period.as_str()));
        }

        let models = query
            .order_by_desc(budgets::Column::CreatedAt)
            .all(&self.db)
            .await?;
        into_records(models)
    }

    /// Applies a partial update, re-checking the category if it changes.
    pub async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        patch: BudgetPatch,
    ) -> Result<Budget, StoreError> {
        patch.validate()?;

        let current = find_owned::<budgets::Entity>(&self.db, owner, id).await?;
        if let Some(category_id) = patch.category_id.filter(|c| *c != current.category_id) {
            ensure_reference::<categories::Entity>(&self.db, owner, category_id, "category_id")
                .await?;
        }

        let mut active: budgets::ActiveModel = current.into();
        if let Some(category_id) = patch.category_id {
            active.category_id = Set(category_id);
        }
        if let Some(amount) = patch.amount {
            active.amount = Set(amount);
        }
        if let Some(period) = patch.period {
            active.period = Set(period.as_str().to_string());
        }
        if let Some(start_date) = patch.start_date {
            active.start_date = Set(start_date);
        }
        active.updated_at = Set(now());

        let model = active.update(&self.db).await?;
        info!(budget_id = %id, user_id = %owner, "Budget updated");
        model.try_into()
    }

    /// Archives a budget.
    pub async fn archive(&self, owner: Uuid, id: Uuid) -> Result<Budget, StoreError> {
        self.toggle(owner, id, LifecycleAction::Archive).await
    }

    /// Restores a budget.
    pub async fn restore(&self, owner: Uuid, id: Uuid) -> Result<Budget, StoreError> {
        self.toggle(owner, id, LifecycleAction::Restore).await
    }

    /// Permanently removes a budget.
    pub async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), StoreError> {
        apply_lifecycle::<budgets::Entity, Budget>(&self.db, owner, id, LifecycleAction::Delete)
            .await
            .map(|_| ())
    }

    async fn toggle(
        &self,
        owner: Uuid,
        id: Uuid,
        action: LifecycleAction,
    ) -> Result<Budget, StoreError> {
        apply_lifecycle::<budgets::Entity, Budget>(&self.db, owner, id, action)
            .await?
            .ok_or(StoreError::NotFound("Budget"))
    }
}
