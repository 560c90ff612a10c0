//! Money accounts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::kinds::AccountKind;
use crate::lifecycle::SoftDeletable;
use crate::validation::{ValidationError, validate_money, validate_name};

/// A money account owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Account {
    /// Account ID.
    pub id: Uuid,
    /// Owner.
    pub user_id: Uuid,
    /// Display name.
    pub name: String,
    /// Account kind.
    #[serde(rename = "type")]
    pub kind: AccountKind,
    /// Current balance; negative values are kept as-is.
    pub balance: Decimal,
    /// Archived flag.
    pub is_deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl SoftDeletable for Account {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// Payload for creating an account.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewAccount {
    /// Display name.
    pub name: String,
    /// Account kind.
    #[serde(rename = "type")]
    pub kind: AccountKind,
    /// Opening balance.
    #[serde(default)]
    pub balance: Decimal,
}

impl NewAccount {
    /// Validates the payload.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("name", &self.name)?;
        validate_money("balance", self.balance)
    }
}

/// Partial update of an account; absent fields stay unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AccountPatch {
    /// New display name.
    pub name: Option<String>,
    /// New account kind.
    #[serde(rename = "type")]
    pub kind: Option<AccountKind>,
    /// New balance.
    pub balance: Option<Decimal>,
}

impl AccountPatch {
    /// Validates the fields that are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name("name", name)?;
        }
        if let Some(balance) = self.balance {
            validate_money("balance", balance)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_new_account_defaults_balance_to_zero() {
        let payload: NewAccount =
            serde_json::from_value(json!({ "name": "Wallet", "type": "cash" })).unwrap();
        assert_eq!(payload.balance, Decimal::ZERO);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_new_account_accepts_numeric_and_string_balance() {
        let numeric: NewAccount = serde_json::from_value(
            json!({ "name": "BDO Savings", "type": "bank", "balance": 5000 }),
        )
        .unwrap();
        assert_eq!(numeric.balance, dec!(5000));

        let text: NewAccount = serde_json::from_value(
            json!({ "name": "Visa", "type": "credit", "balance": "-1250.75" }),
        )
        .unwrap();
        assert_eq!(text.balance, dec!(-1250.75));
    }

    #[test]
    fn test_new_account_rejects_blank_name() {
        let payload: NewAccount =
            serde_json::from_value(json!({ "name": "  ", "type": "cash" })).unwrap();
        assert_eq!(
            payload.validate(),
            Err(ValidationError::Empty { field: "name" })
        );
    }

    #[test]
    fn test_patch_only_checks_present_fields() {
        assert!(AccountPatch::default().validate().is_ok());

        let patch: AccountPatch = serde_json::from_value(json!({ "name": "" })).unwrap();
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_balance_must_fit_money_column() {
        let payload: NewAccount = serde_json::from_value(
            json!({ "name": "Wallet", "type": "cash", "balance": "10.005" }),
        )
        .unwrap();
        assert_eq!(
            payload.validate(),
            Err(ValidationError::TooPrecise {
                field: "balance",
                max: 2
            })
        );

        let patch = AccountPatch {
            balance: Some(dec!(100000000000000)),
            ..AccountPatch::default()
        };
        assert!(matches!(
            patch.validate(),
            Err(ValidationError::AmountOutOfRange { field: "balance", .. })
        ));
    }

    #[test]
    fn test_account_serializes_kind_as_type() {
        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "GCash".to_string(),
            kind: AccountKind::Ewallet,
            balance: dec!(120.50),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["type"], "ewallet");
        assert_eq!(value["balance"], "120.50");
        assert_eq!(value["is_deleted"], false);
    }
}
