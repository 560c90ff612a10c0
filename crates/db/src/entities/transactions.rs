//! `SeaORM` Entity for transactions table.
//!
//! `account_id` and `category_id` carry no foreign keys: deleting an account
//! or category leaves its transactions in place.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use spendwise_core::Transaction;

use crate::repositories::{OwnedEntity, StoreError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub account_id: Uuid,
    pub category_id: Uuid,
    pub kind: String,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub amount: Decimal,
    pub description: Option<String>,
    pub transaction_date: Date,
    pub is_deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl OwnedEntity for Entity {
    const LABEL: &'static str = "Transaction";

    fn id_column() -> Column {
        Column::Id
    }

    fn owner_column() -> Column {
        Column::UserId
    }

    fn archived_column() -> Column {
        Column::IsDeleted
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }
}

impl TryFrom<Model> for Transaction {
    type Error = StoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            kind: model
                .kind
                .parse()
                .map_err(|_| StoreError::corrupt(Entity::LABEL, model.id, "kind", &model.kind))?,
            id: model.id,
            user_id: model.user_id,
            account_id: model.account_id,
            category_id: model.category_id,
            amount: model.amount,
            description: model.description,
            date: model.transaction_date,
            is_deleted: model.is_deleted,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}
