//! Core business logic for SpendWise.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `records` - Owner-scoped domain records and their create/patch payloads
//! - `validation` - Field-level validation rules
//! - `lifecycle` - Archive / restore / delete state machine
//! - `stats` - Monthly income/expense and total balance aggregation
//! - `auth` - Password hashing and credential checks

pub mod auth;
pub mod lifecycle;
pub mod records;
pub mod stats;
pub mod validation;

pub use lifecycle::{LifecycleAction, ListScope, RecordState, SoftDeletable, Transition};
pub use records::{
    Account, AccountKind, AccountPatch, Budget, BudgetPatch, BudgetPeriod, Category,
    CategoryPatch, EntryKind, NewAccount, NewBudget, NewCategory, NewTransaction, Transaction,
    TransactionPatch,
};
pub use stats::{IncomeExpenseTotals, MonthWindow, TotalBalance};
pub use validation::ValidationError;
