//! Spending budgets per category.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::kinds::BudgetPeriod;
use crate::lifecycle::SoftDeletable;
use crate::validation::{ValidationError, validate_positive_amount};

/// A budget owned by a user for one of their categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Budget {
    /// Budget ID.
    pub id: Uuid,
    /// Owner.
    pub user_id: Uuid,
    /// Referenced category (same owner).
    pub category_id: Uuid,
    /// Budgeted amount per period.
    pub amount: Decimal,
    /// Recurrence period.
    pub period: BudgetPeriod,
    /// First day the budget applies.
    pub start_date: NaiveDate,
    /// Archived flag.
    pub is_deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl SoftDeletable for Budget {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// Payload for creating a budget.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewBudget {
    /// Category the budget applies to.
    #[serde(alias = "category")]
    pub category_id: Uuid,
    /// Budgeted amount per period.
    pub amount: Decimal,
    /// Recurrence period.
    pub period: BudgetPeriod,
    /// First day the budget applies; defaults to today.
    #[serde(default, alias = "startDate")]
    pub start_date: Option<NaiveDate>,
}

impl NewBudget {
    /// Validates the payload.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_positive_amount("amount", self.amount)
    }
}

/// Partial update of a budget.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BudgetPatch {
    /// New category reference.
    #[serde(default, alias = "category")]
    pub category_id: Option<Uuid>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New period.
    pub period: Option<BudgetPeriod>,
    /// New start date.
    #[serde(default, alias = "startDate")]
    pub start_date: Option<NaiveDate>,
}

impl BudgetPatch {
    /// Validates the fields that are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(amount) = self.amount {
            validate_positive_amount("amount", amount)?;
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
    fn test_new_budget_accepts_camel_case_aliases() {
        let category = Uuid::new_v4();
        let payload: NewBudget = serde_json::from_value(json!({
            "category": category,
            "amount": 5000,
            "period": "monthly",
            "startDate": "2025-02-01"
        }))
        .unwrap();

        assert_eq!(payload.category_id, category);
        assert_eq!(payload.amount, dec!(5000));
        assert_eq!(payload.period, BudgetPeriod::Monthly);
        assert_eq!(payload.start_date, NaiveDate::from_ymd_opt(2025, 2, 1));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_budget_amount_must_be_positive() {
        let patch = BudgetPatch {
            amount: Some(dec!(-1)),
            ..BudgetPatch::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_budget_amount_must_fit_money_column() {
        let payload: NewBudget = serde_json::from_value(json!({
            "category_id": Uuid::new_v4(),
            "amount": "100000000000000",
            "period": "yearly"
        }))
        .unwrap();

        assert_eq!(
            payload.validate(),
            Err(ValidationError::AmountOutOfRange {
                field: "amount",
                digits: 14
            })
        );
    }
}
