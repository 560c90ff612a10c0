//! Owner scoping and the archive/restore/delete lifecycle, shared by every
//! owned entity.

use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Select,
    prelude::DateTimeWithTimeZone, sea_query::Expr,
};
use spendwise_core::{LifecycleAction, ListScope, SoftDeletable, Transition, lifecycle};
use uuid::Uuid;

use super::StoreError;

/// An entity whose rows belong to one user and carry the archived flag.
pub trait OwnedEntity: EntityTrait {
    /// Name used in errors and logs.
    const LABEL: &'static str;

    /// Primary key column.
    fn id_column() -> Self::Column;

    /// Owning user column.
    fn owner_column() -> Self::Column;

    /// `is_deleted` column.
    fn archived_column() -> Self::Column;

    /// `updated_at` column.
    fn updated_at_column() -> Self::Column;
}

pub(crate) fn now() -> DateTimeWithTimeZone {
    Utc::now().into()
}

/// All rows of `E` owned by `owner`.
pub(crate) fn owned_by<E: OwnedEntity>(owner: Uuid) -> Select<E> {
    E::find().filter(E::owner_column().eq(owner))
}

/// Rows of `E` owned by `owner` in one half of the lifecycle.
pub(crate) fn scoped<E: OwnedEntity>(owner: Uuid, scope: ListScope) -> Select<E> {
    owned_by::<E>(owner).filter(E::archived_column().eq(scope.is_deleted()))
}

/// Fetches one row by id, whatever its archived state.
pub(crate) async fn find_owned<E: OwnedEntity>(
    db: &DatabaseConnection,
    owner: Uuid,
    id: Uuid,
) -> Result<E::Model, StoreError> {
    owned_by::<E>(owner)
        .filter(E::id_column().eq(id))
        .one(db)
        .await?
        .ok_or(StoreError::NotFound(E::LABEL))
}

/// Checks that `id` names a row of `E` owned by `owner`. Archived rows count.
pub(crate) async fn ensure_reference<E: OwnedEntity>(
    db: &DatabaseConnection,
    owner: Uuid,
    id: Uuid,
    field: &'static str,
) -> Result<(), StoreError> {
    let found = owned_by::<E>(owner)
        .filter(E::id_column().eq(id))
        .one(db)
        .await?;

    match found {
        Some(_) => Ok(()),
        None => Err(StoreError::InvalidReference {
            field,
            resource: E::LABEL,
        }),
    }
}

/// Applies a lifecycle action. Returns the record as it ends up, or `None`
/// once it has been removed.
pub(crate) async fn apply_lifecycle<E, R>(
    db: &DatabaseConnection,
    owner: Uuid,
    id: Uuid,
    action: LifecycleAction,
) -> Result<Option<R>, StoreError>
where
    E: OwnedEntity,
    R: TryFrom<E::Model, Error = StoreError> + SoftDeletable,
{
    let current = R::try_from(find_owned::<E>(db, owner, id).await?)?;

    match lifecycle::transition(current.state(), action) {
        Transition::Unchanged => Ok(Some(current)),
        Transition::Move(next) => {
            E::update_many()
                .col_expr(E::archived_column(), Expr::value(next.flag()))
                .col_expr(E::updated_at_column(), Expr::value(now()))
                .filter(E::id_column().eq(id))
                .filter(E::owner_column().eq(owner))
                .exec(db)
                .await?;

            tracing::info!(
                resource = E::LABEL,
                id = %id,
                user_id = %owner,
                "Record {}",
                action.past_tense()
            );

            let updated = find_owned::<E>(db, owner, id).await?;
            R::try_from(updated).map(Some)
        }
        Transition::Remove => {
            let result = E::delete_many()
                .filter(E::id_column().eq(id))
                .filter(E::owner_column().eq(owner))
                .exec(db)
                .await?;

            if result.rows_affected == 0 {
                return Err(StoreError::NotFound(E::LABEL));
            }

            tracing::info!(
                resource = E::LABEL,
                id = %id,
                user_id = %owner,
                "Record deleted"
            );
            Ok(None)
        }
    }
}

/// Converts fetched rows into domain records.
pub(crate) fn into_records<M, R>(models: Vec<M>) -> Result<Vec<R>, StoreError>
where
    R: TryFrom<M, Error = StoreError>,
{
    models.into_iter().map(R::try_from).collect()
}
