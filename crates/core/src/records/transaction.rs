//! Income and expense transactions.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::kinds::EntryKind;
use crate::lifecycle::SoftDeletable;
use crate::validation::{ValidationError, validate_description, validate_positive_amount};

/// A transaction owned by a user, posted against one account and one category.
///
/// Creating a transaction never changes the referenced account's balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Transaction {
    /// Transaction ID.
    pub id: Uuid,
    /// Owner.
    pub user_id: Uuid,
    /// Referenced account (same owner).
    pub account_id: Uuid,
    /// Referenced category (same owner).
    pub category_id: Uuid,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Positive amount.
    pub amount: Decimal,
    /// Optional description.
    pub description: Option<String>,
    /// Calendar date of the transaction.
    pub date: NaiveDate,
    /// Archived flag.
    pub is_deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl SoftDeletable for Transaction {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// Payload for creating a transaction.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewTransaction {
    /// Account the transaction is posted against.
    #[serde(alias = "account")]
    pub account_id: Uuid,
    /// Category of the transaction.
    #[serde(alias = "category")]
    pub category_id: Uuid,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Positive amount.
    pub amount: Decimal,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Transaction date; defaults to today.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl NewTransaction {
    /// Validates the payload.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_positive_amount("amount", self.amount)?;
        validate_description(self.description.as_deref())
    }
}

/// Partial update of a transaction.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TransactionPatch {
    /// New account reference.
    #[serde(default, alias = "account")]
    pub account_id: Option<Uuid>,
    /// New category reference.
    #[serde(default, alias = "category")]
    pub category_id: Option<Uuid>,
    /// New kind.
    #[serde(rename = "type")]
    pub kind: Option<EntryKind>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New description, or `Some(None)` to clear it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    /// New date.
    pub date: Option<NaiveDate>,
}

impl TransactionPatch {
    /// Validates the fields that are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(amount) = self.amount {
            validate_positive_amount("amount", amount)?;
        }
        if let Some(description) = &self.description {
            validate_description(description.as_deref())?;
        }
        Ok(())
    }
}
