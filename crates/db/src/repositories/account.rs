//! Account repository.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder, Set};
use spendwise_core::{Account, AccountKind, AccountPatch, LifecycleAction, ListScope, NewAccount};
use tracing::info;
use uuid::Uuid;

use super::StoreError;
use super::owned::{apply_lifecycle, find_owned, into_records, now, scoped};
use crate::entities::accounts;

/// Narrows an account listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountFilter {
    /// Archived or active half.
    pub scope: ListScope,
    /// Only accounts of this kind.
    pub kind: Option<AccountKind>,
}

/// Account repository scoped to an owner.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active account owned by `owner`.
    pub async fn create(&self, owner: Uuid, input: NewAccount) -> Result<Account, StoreError> {
        input.validate()?;

        let now = now();
        let model = accounts::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner),
            name: Set(input.name.trim().to_string()),
            kind: Set(input.kind.as_str().to_string()),
            balance: Set(input.balance),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        info!(account_id = %model.id, user_id = %owner, "Account created");
        model.try_into()
    }

    /// Fetches an account whatever its archived state.
    pub async fn get(&self, owner: Uuid, id: Uuid) -> Result<Account, StoreError> {
        find_owned::<accounts::Entity>(&self.db, owner, id)
            .await?
            .try_into()
    }

    /// Lists accounts, newest first.
    pub async fn list(&self, owner: Uuid, filter: AccountFilter) -> Result<Vec<Account>, StoreError> {
        let mut query = scoped::<accounts::Entity>(owner, filter.scope);
        if let Some(kind) = filter.kind {
            query = query.filter(accounts::Column::Kind.eq(kind.as_str()));
        }

        let models = query
            .order_by_desc(accounts::Column::CreatedAt)
            .all(&self.db)
            .await?;
        into_records(models)
    }

    /// Applies a partial update. Archived accounts can be updated too.
    pub async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        patch: AccountPatch,
    ) -> Result<Account, StoreError> {
        patch.validate()?;

        let mut active: accounts::ActiveModel =
            find_owned::<accounts::Entity>(&self.db, owner, id).await?.into();

        if let Some(name) = patch.name {
            active.name = Set(name.trim().to_string());
        }
        if let Some(kind) = patch.kind {
            active.kind = Set(kind.as_str().to_string());
        }
        if let Some(balance) = patch.balance {
            active.balance = Set(balance);
        }
        active.updated_at = Set(now());

        let model = active.update(&self.db).await?;
        info!(account_id = %id, user_id = %owner, "Account updated");
        model.try_into()
    }

    /// Archives an account. Archiving an archived account changes nothing.
    pub async fn archive(&self, owner: Uuid, id: Uuid) -> Result<Account, StoreError> {
        self.toggle(owner, id, LifecycleAction::Archive).await
    }

    /// Restores an archived account. Restoring an active account changes nothing.
    pub async fn restore(&self, owner: Uuid, id: Uuid) -> Result<Account, StoreError> {
        self.toggle(owner, id, LifecycleAction::Restore).await
    }

    /// Permanently removes an account. Transactions referencing it are kept.
    pub async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), StoreError> {
        apply_lifecycle::<accounts::Entity, Account>(&self.db, owner, id, LifecycleAction::Delete)
            .await
            .map(|_| ())
    }

    async fn toggle(
        &self,
        owner: Uuid,
        id: Uuid,
        action: LifecycleAction,
    ) -> Result<Account, StoreError> {
        apply_lifecycle::<accounts::Entity, Account>(&self.db, owner, id, action)
            .await?
            .ok_or(StoreError::NotFound("Account"))
    }
}
