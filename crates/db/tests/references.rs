//! Same-owner reference checks for transactions and budgets.

mod common;

use rust_decimal_macros::dec;
use spendwise_core::{AccountKind, BudgetPeriod, EntryKind, NewBudget, TransactionPatch};
use spendwise_db::{
    AccountRepository, BudgetRepository, CategoryRepository, StoreError, TransactionFilter,
    TransactionRepository,
};

use common::{create_user, last_month, new_account, new_category, new_transaction, setup, this_month};

#[tokio::test]
async fn test_foreign_account_is_rejected_whatever_its_state() {
    let db = setup().await;
    let owner = create_user(&db, "owner@example.com").await;
    let other = create_user(&db, "other@example.com").await;
    let accounts = AccountRepository::new(db.clone());
    let categories = CategoryRepository::new(db.clone());
    let transactions = TransactionRepository::new(db);

    let category = categories
        .create(owner, new_category("Salary", EntryKind::Income))
        .await
        .unwrap();
    let foreign = accounts
        .create(other, new_account("Theirs", AccountKind::Bank, dec!(10)))
        .await
        .unwrap();

    for archived in [false, true] {
        if archived {
            accounts.archive(other, foreign.id).await.unwrap();
        }
        let err = transactions
            .create(
                owner,
                new_transaction(foreign.id, category.id, EntryKind::Income, dec!(5), this_month()),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidReference {
                field: "account_id",
                ..
            }
        ));
    }

    assert!(
        transactions
            .list(owner, TransactionFilter::default())
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_own_archived_account_is_a_valid_reference() {
    let db = setup().await;
    let owner = create_user(&db, "owner@example.com").await;
    let accounts = AccountRepository::new(db.clone());
    let categories = CategoryRepository::new(db.clone());
    let transactions = TransactionRepository::new(db);

    let account = accounts
        .create(owner, new_account("Old", AccountKind::Cash, dec!(0)))
        .await
        .unwrap();
    accounts.archive(owner, account.id).await.unwrap();
    let category = categories
        .create(owner, new_category("Food", EntryKind::Expense))
        .await
        .unwrap();

    let transaction = transactions
        .create(
            owner,
            new_transaction(account.id, category.id, EntryKind::Expense, dec!(12.5), this_month()),
        )
        .await
        .unwrap();

    assert_eq!(transaction.account_id, account.id);
    assert_eq!(transaction.user_id, owner);
}

#[tokio::test]
async fn test_patch_to_foreign_category_is_rejected() {
    let db = setup().await;
    let owner = create_user(&db, "owner@example.com").await;
    let other = create_user(&db, "other@example.com").await;
    let accounts = AccountRepository::new(db.clone());
    let categories = CategoryRepository::new(db.clone());
    let transactions = TransactionRepository::new(db);

    let account = accounts
        .create(owner, new_account("Wallet", AccountKind::Cash, dec!(0)))
        .await
        .unwrap();
    let category = categories
        .create(owner, new_category("Food", EntryKind::Expense))
        .await
        .unwrap();
    let foreign = categories
        .create(other, new_category("Theirs", EntryKind::Expense))
        .await
        .unwrap();
    let transaction = transactions
        .create(
            owner,
            new_transaction(account.id, category.id, EntryKind::Expense, dec!(3), this_month()),
        )
        .await
        .unwrap();

    let err = transactions
        .update(
            owner,
            transaction.id,
            TransactionPatch {
                category_id: Some(foreign.id),
                ..TransactionPatch::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::InvalidReference {
            field: "category_id",
            ..
        }
    ));

    let unchanged = transactions.get(owner, transaction.id).await.unwrap();
    assert_eq!(unchanged.category_id, category.id);
}

#[tokio::test]
async fn test_budget_requires_own_category() {
    let db = setup().await;
    let owner = create_user(&db, "owner@example.com").await;
    let other = create_user(&db, "other@example.com").await;
    let categories = CategoryRepository::new(db.clone());
    let budgets = BudgetRepository::new(db);

    let own = categories
        .create(owner, new_category("Food", EntryKind::Expense))
        .await
        .unwrap();
    let foreign = categories
        .create(other, new_category("Food", EntryKind::Expense))
        .await
        .unwrap();

    let err = budgets
        .create(
            owner,
            NewBudget {
                category_id: foreign.id,
                amount: dec!(400),
                period: BudgetPeriod::Monthly,
                start_date: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidReference { .. }));

    let budget = budgets
        .create(
            owner,
            NewBudget {
                category_id: own.id,
                amount: dec!(400),
                period: BudgetPeriod::Weekly,
                start_date: Some(this_month()),
            },
        )
        .await
        .unwrap();
    assert_eq!(budget.category_id, own.id);
    assert_eq!(budget.period, BudgetPeriod::Weekly);
    assert_eq!(budget.start_date, this_month());
}

#[tokio::test]
async fn test_deleting_account_leaves_transactions_dangling() {
    let db = setup().await;
    let owner = create_user(&db, "owner@example.com").await;
    let accounts = AccountRepository::new(db.clone());
    let categories = CategoryRepository::new(db.clone());
    let transactions = TransactionRepository::new(db);

    let account = accounts
        .create(owner, new_account("Wallet", AccountKind::Cash, dec!(0)))
        .await
        .unwrap();
    let category = categories
        .create(owner, new_category("Food", EntryKind::Expense))
        .await
        .unwrap();
    let transaction = transactions
        .create(
            owner,
            new_transaction(account.id, category.id, EntryKind::Expense, dec!(9), this_month()),
        )
        .await
        .unwrap();

    accounts.delete(owner, account.id).await.unwrap();

    let kept = transactions.get(owner, transaction.id).await.unwrap();
    assert_eq!(kept.account_id, account.id);
}

#[tokio::test]
async fn test_transactions_list_latest_date_first() {
    let db = setup().await;
    let owner = create_user(&db, "owner@example.com").await;
    let accounts = AccountRepository::new(db.clone());
    let categories = CategoryRepository::new(db.clone());
    let transactions = TransactionRepository::new(db);

    let account = accounts
        .create(owner, new_account("Wallet", AccountKind::Cash, dec!(0)))
        .await
        .unwrap();
    let category = categories
        .create(owner, new_category("Food", EntryKind::Expense))
        .await
        .unwrap();

    for date in [last_month(), this_month()] {
        transactions
            .create(
                owner,
                new_transaction(account.id, category.id, EntryKind::Expense, dec!(1), date),
            )
            .await
            .unwrap();
    }

    let listed = transactions
        .list(owner, TransactionFilter::default())
        .await
        .unwrap();
    let dates: Vec<_> = listed.iter().map(|t| t.date).collect();
    assert_eq!(dates, vec![this_month(), last_month()]);
}
