//! Category repository.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder, Set};
use spendwise_core::validation::normalize_optional_text;
use spendwise_core::{Category, CategoryPatch, EntryKind, LifecycleAction, ListScope, NewCategory};
use tracing::info;
use uuid::Uuid;

use super::StoreError;
use super::owned::{apply_lifecycle, find_owned, into_records, now, scoped};
use crate::entities::categories;

/// Narrows a category listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryFilter {
    /// Archived or active half.
    pub scope: ListScope,
    /// Only income or only expense categories.
    pub kind: Option<EntryKind>,
}

/// Category repository scoped to an owner.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active category owned by `owner`.
    pub async fn create(&self, owner: Uuid, input: NewCategory) -> Result<Category, StoreError> {
        input.validate()?;

        let now = now();
        let model = categories::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner),
            name: Set(input.name.trim().to_string()),
            kind: Set(input.kind.as_str().to_string()),
            description: Set(normalize_optional_text(input.description.as_deref())),
            color: Set(normalize_optional_text(input.color.as_deref())),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        info!(category_id = %model.id, user_id = %owner, "Category created");
        model.try_into()
    }

    /// Fetches a category whatever its archived state.
    pub async fn get(&self, owner: Uuid, id: Uuid) -> Result<Category, StoreError> {
        find_owned::<categories::Entity>(&self.db, owner, id)
            .await?
            .try_into()
    }

    /// Lists categories, newest first.
    pub async fn list(
        &self,
        owner: Uuid,
        filter: CategoryFilter,
    ) -> Result<Vec<Category>, StoreError> {
        let mut query = scoped::<categories::Entity>(owner, filter.scope);
        if let Some(kind) = filter.kind {
            query = query.filter(categories::Column::Kind.eq(kind.as_str()));
        }

        let models = query
            .order_by_desc(categories::Column::CreatedAt)
            .all(&self.db)
            .await?;
        into_records(models)
    }

    /// Applies a partial update. `Some(None)` clears description or color.
    pub async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        patch: CategoryPatch,
    ) -> Result<Category, StoreError> {
        patch.validate()?;

        let mut active: categories::ActiveModel =
            find_owned::<categories::Entity>(&self.db, owner, id).await?.into();

        if let Some(name) = patch.name {
            active.name = Set(name.trim().to_string());
        }
        if let Some(kind) = patch.kind {
            active.kind = Set(kind.as_str().to_string());
        }
        if let Some(description) = patch.description {
            active.description = Set(normalize_optional_text(description.as_deref()));
        }
        if let Some(color) = patch.color {
            active.color = Set(normalize_optional_text(color.as_deref()));
        }
        active.updated_at = Set(now());

        let model = active.update(&self.db).await?;
        info!(category_id = %id, user_id = %owner, "Category updated");
        model.try_into()
    }

    /// Archives a category.
    pub async fn archive(&self, owner: Uuid, id: Uuid) -> Result<Category, StoreError> {
        self.toggle(owner, id, LifecycleAction::Archive).await
    }

    /// Restores a category.
    pub async fn restore(&self, owner: Uuid, id: Uuid) -> Result<Category, StoreError> {
        self.toggle(owner, id, LifecycleAction::Restore).await
    }

    /// Permanently removes a category. Transactions and budgets referencing
    /// it are kept.
    pub async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), StoreError> {
        apply_lifecycle::<categories::Entity, Category>(
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
    ) -> Result<Category, StoreError> {
        apply_lifecycle::<categories::Entity, Category>(&self.db, owner, id, action)
            .await?
            .ok_or(StoreError::NotFound("Category"))
    }
}
