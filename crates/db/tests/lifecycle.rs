//! Owner scoping and archive/restore/delete behavior of the repositories.

mod common;

use rust_decimal_macros::dec;
use spendwise_core::{AccountKind, AccountPatch, CategoryPatch, EntryKind, ListScope};
use spendwise_db::{AccountFilter, AccountRepository, CategoryFilter, CategoryRepository, StoreError};

use common::{create_user, new_account, new_category, setup};

// ============================================================================
// Create / get / update
// ============================================================================

#[tokio::test]
async fn test_create_sets_owner_and_starts_active() {
    let db = setup().await;
    let owner = create_user(&db, "owner@example.com").await;
    let repo = AccountRepository::new(db);

    let account = repo
        .create(owner, new_account("  Wallet  ", AccountKind::Cash, dec!(150.5)))
        .await
        .unwrap();

    assert_eq!(account.user_id, owner);
    assert_eq!(account.name, "Wallet");
    assert_eq!(account.kind, AccountKind::Cash);
    assert_eq!(account.balance, dec!(150.5));
    assert!(!account.is_deleted);

    let fetched = repo.get(owner, account.id).await.unwrap();
    assert_eq!(fetched, account);
}

#[tokio::test]
async fn test_update_applies_patch_and_keeps_owner() {
    let db = setup().await;
    let owner = create_user(&db, "owner@example.com").await;
    let repo = AccountRepository::new(db);
    let account = repo
        .create(owner, new_account("Checking", AccountKind::Bank, dec!(10)))
        .await
        .unwrap();

    let updated = repo
        .update(
            owner,
            account.id,
            AccountPatch {
                balance: Some(dec!(-75.25)),
                ..AccountPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, account.id);
    assert_eq!(updated.user_id, owner);
    assert_eq!(updated.name, "Checking");
    assert_eq!(updated.balance, dec!(-75.25));
    assert_eq!(updated.created_at, account.created_at);
}

#[tokio::test]
async fn test_invalid_payload_is_rejected_before_write() {
    let db = setup().await;
    let owner = create_user(&db, "owner@example.com").await;
    let repo = AccountRepository::new(db);

    let err = repo
        .create(owner, new_account("   ", AccountKind::Cash, dec!(0)))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let listed = repo.list(owner, AccountFilter::default()).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_other_users_records_are_not_found() {
    let db = setup().await;
    let owner = create_user(&db, "owner@example.com").await;
    let intruder = create_user(&db, "intruder@example.com").await;
    let repo = AccountRepository::new(db);
    let account = repo
        .create(owner, new_account("Savings", AccountKind::Bank, dec!(500)))
        .await
        .unwrap();

    assert!(matches!(
        repo.get(intruder, account.id).await,
        Err(StoreError::NotFound("Account"))
    ));
    assert!(matches!(
        repo.update(intruder, account.id, AccountPatch::default()).await,
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        repo.archive(intruder, account.id).await,
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        repo.delete(intruder, account.id).await,
        Err(StoreError::NotFound(_))
    ));
    assert!(
        repo.list(intruder, AccountFilter::default())
            .await
            .unwrap()
            .is_empty()
    );

    // Untouched for the real owner.
    let still_there = repo.get(owner, account.id).await.unwrap();
    assert!(!still_there.is_deleted);
}

// ============================================================================
// Archive / restore / delete
// ============================================================================

#[tokio::test]
async fn test_archive_then_restore_round_trips() {
    let db = setup().await;
    let owner = create_user(&db, "owner@example.com").await;
    let repo = CategoryRepository::new(db);
    let original = repo
        .create(owner, new_category("Salary", EntryKind::Income))
        .await
        .unwrap();

    let archived = repo.archive(owner, original.id).await.unwrap();
    assert!(archived.is_deleted);

    let restored = repo.restore(owner, original.id).await.unwrap();
    assert!(!restored.is_deleted);
    assert_eq!(restored.name, original.name);
    assert_eq!(restored.kind, original.kind);
    assert_eq!(restored.description, original.description);
    assert_eq!(restored.color, original.color);
    assert_eq!(restored.user_id, original.user_id);
    assert_eq!(restored.created_at, original.created_at);
}

#[tokio::test]
async fn test_repeated_archive_changes_nothing() {
    let db = setup().await;
    let owner = create_user(&db, "owner@example.com").await;
    let repo = AccountRepository::new(db);
    let account = repo
        .create(owner, new_account("Card", AccountKind::Credit, dec!(-20)))
        .await
        .unwrap();

    let first = repo.archive(owner, account.id).await.unwrap();
    let second = repo.archive(owner, account.id).await.unwrap();
    assert_eq!(first, second);

    // Restoring an active record is a no-op as well.
    let restored = repo.restore(owner, account.id).await.unwrap();
    let again = repo.restore(owner, account.id).await.unwrap();
    assert_eq!(restored, again);
}

#[tokio::test]
async fn test_active_and_archived_listings_are_disjoint() {
    let db = setup().await;
    let owner = create_user(&db, "owner@example.com").await;
    let repo = AccountRepository::new(db);

    let mut ids = Vec::new();
    for name in ["One", "Two", "Three", "Four"] {
        let account = repo
            .create(owner, new_account(name, AccountKind::Cash, dec!(1)))
            .await
            .unwrap();
        ids.push(account.id);
    }
    repo.archive(owner, ids[0]).await.unwrap();
    repo.archive(owner, ids[2]).await.unwrap();

    let active = repo.list(owner, AccountFilter::default()).await.unwrap();
    let archived = repo
        .list(
            owner,
            AccountFilter {
                scope: ListScope::Archived,
                ..AccountFilter::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(active.len(), 2);
    assert_eq!(archived.len(), 2);
    assert!(active.iter().all(|a| !a.is_deleted));
    assert!(archived.iter().all(|a| a.is_deleted));
    assert!(
        active
            .iter()
            .all(|a| archived.iter().all(|b| a.id != b.id))
    );
}

#[tokio::test]
async fn test_delete_removes_and_second_delete_is_not_found() {
    let db = setup().await;
    let owner = create_user(&db, "owner@example.com").await;
    let repo = AccountRepository::new(db);
    let active = repo
        .create(owner, new_account("Active", AccountKind::Ewallet, dec!(5)))
        .await
        .unwrap();
    let archived = repo
        .create(owner, new_account("Archived", AccountKind::Bank, dec!(5)))
        .await
        .unwrap();
    repo.archive(owner, archived.id).await.unwrap();

    for id in [active.id, archived.id] {
        repo.delete(owner, id).await.unwrap();
        assert!(matches!(
            repo.get(owner, id).await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            repo.delete(owner, id).await,
            Err(StoreError::NotFound(_))
        ));
    }
}

// ============================================================================
// Filters
// ============================================================================

#[tokio::test]
async fn test_list_filters_by_kind() {
    let db = setup().await;
    let owner = create_user(&db, "owner@example.com").await;
    let repo = CategoryRepository::new(db);
    repo.create(owner, new_category("Salary", EntryKind::Income))
        .await
        .unwrap();
    repo.create(owner, new_category("Food", EntryKind::Expense))
        .await
        .unwrap();
    repo.create(owner, new_category("Rent", EntryKind::Expense))
        .await
        .unwrap();

    let expenses = repo
        .list(
            owner,
            CategoryFilter {
                kind: Some(EntryKind::Expense),
                ..CategoryFilter::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(expenses.len(), 2);
    assert!(expenses.iter().all(|c| c.kind == EntryKind::Expense));
}

#[tokio::test]
async fn test_category_patch_clears_optional_text() {
    let db = setup().await;
    let owner = create_user(&db, "owner@example.com").await;
    let repo = CategoryRepository::new(db);
    let mut input = new_category("Food", EntryKind::Expense);
    input.description = Some("Groceries and eating out".to_string());
    input.color = Some("#FF8800".to_string());
    let category = repo.create(owner, input).await.unwrap();
    assert_eq!(category.color.as_deref(), Some("#FF8800"));

    let updated = repo
        .update(
            owner,
            category.id,
            CategoryPatch {
                description: Some(None),
                ..CategoryPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.description, None);
    assert_eq!(updated.color.as_deref(), Some("#FF8800"));
}
