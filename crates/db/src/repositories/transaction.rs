//! Transaction repository.
//!
//! Transactions reference an account and a category of the same owner.
//! References are checked on create and whenever a patch changes them; they
//! are never re-checked afterwards, so later deletes can leave them dangling.
//! Recording a transaction does not touch the account balance.

use chrono::Local;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder, Set};
use spendwise_core::validation::normalize_optional_text;
use spendwise_core::{
    EntryKind, LifecycleAction, ListScope, NewTransaction, Transaction, TransactionPatch,
};
use tracing::info;
use uuid::Uuid;

use super::StoreError;
use super::owned::{apply_lifecycle, ensure_reference, find_owned, into_records, now, scoped};
use crate::entities::{accounts, categories, transactions};

/// Narrows a transaction listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionFilter {
    /// Archived or active half.
    pub scope: ListScope,
    /// Only income or only expense transactions.
    pub kind: Option<EntryKind>,
}

/// Transaction repository scoped to an owner.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a transaction. The date defaults to today.
    pub async fn create(
        &self,
        owner: Uuid,
        input: NewTransaction,
    ) -> Result<Transaction, StoreError> {
        input.validate()?;
        ensure_reference::<accounts::Entity>(&self.db, owner, input.account_id, "account_id")
            .await?;
        ensure_reference::<categories::Entity>(&self.db, owner, input.category_id, "category_id")
            .await?;

        let now = now();
        let model = transactions::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner),
            account_id: Set(input.account_id),
            category_id: Set(input.category_id),
            kind: Set(input.kind.as_str().to_string()),
            amount: Set(input.amount),
            description: Set(normalize_optional_text(input.description.as_deref())),
            transaction_date: Set(input.date.unwrap_or_else(|| Local::now().date_naive())),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        info!(
            transaction_id = %model.id,
            user_id = %owner,
            kind = %input.kind,
            amount = %input.amount,
            "Transaction recorded"
        );
        model.try_into()
    }

    /// Fetches a transaction whatever its archived state.
    pub async fn get(&self, owner: Uuid, id: Uuid) -> Result<Transaction, StoreError> {
        find_owned::<transactions::Entity>(&self.db, owner, id)
            .await?
            .try_into()
    }

    /// Lists transactions, latest date first.
    pub async fn list(
        &self,
        owner: Uuid,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, StoreError> {
        let mut query = scoped::<transactions::Entity>(owner, filter.scope);
        if let Some(kind) = filter.kind {
            query = query.filter(transactions::Column::Kind.eq(kind.as_str()));
        }

        let models = query
            .order_by_desc(transactions::Column::TransactionDate)
            .order_by_desc(transactions::Column::CreatedAt)
            .all(&self.db)
            .await?;
        into_records(models)
    }

    /// Applies a partial update, re-checking any reference it changes.
    pub async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        patch: TransactionPatch,
    ) -> Result<Transaction, StoreError> {
        patch.validate()?;

        let current = find_owned::<transactions::Entity>(&self.db, owner, id).await?;

        if let Some(account_id) = patch.account_id.filter(|a| *a != current.account_id) {
            ensure_reference::<accounts::Entity>(&self.db, owner, account_id, "account_id").await?;
        }
        if let Some(category_id) = patch.category_id.filter(|c| *c != current.category_id) {
            ensure_reference::<categories::Entity>(&self.db, owner, category_id, "category_id")
                .await?;
        }

        let mut active: transactions::ActiveModel = current.into();
        if let Some(account_id) = patch.account_id {
            active.account_id = Set(account_id);
        }
        if let Some(category_id) = patch.category_id {
            active.category_id = Set(category_id);
        }
        if let Some(kind) = patch.kind {
            active.kind = Set(kind.as_str().to_string());
        }
        if let Some(amount) = patch.amount {
            active.amount = Set(amount);
        }
        if let Some(description) = patch.description {
            active.description = Set(normalize_optional_text(description.as_deref()));
        }
        if let Some(date) = patch.date {
            active.transaction_date = Set(date);
        }
        active.updated_at = Set(now());

        let model = active.update(&self.db).await?;
        info!(transaction_id = %id, user_id = %owner, "Transaction updated");
        model.try_into()
    }

    /// Archives a transaction, removing it from stats.
    pub async fn archive(&self, owner: Uuid, id: Uuid) -> Result<Transaction, StoreError> {
        self.toggle(owner, id, LifecycleAction::Archive).await
    }

    /// Restores a transaction.
    pub async fn restore(&self, owner: Uuid, id: Uuid) -> Result<Transaction, StoreError> {
        self.toggle(owner, id, LifecycleAction::Restore).await
    }

    /// Permanently removes a transaction.
    pub async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), StoreError> {
        apply_lifecycle::<transactions::Entity, Transaction>(
            &self.db,
            owner,
            id,
            LifecycleAction::Delete,
        )
        .await
        .map(|_| ())
    }

    async fn toggle(
        &self,
        owner: Uuid,
        id: Uuid,
        action: LifecycleAction,
    ) -> Result<Transaction, StoreError> {
        apply_lifecycle::<transactions::Entity, Transaction>(&self.db, owner, id, action)
            .await?
            .ok_or(StoreError::NotFound("Transaction"))
    }
}
