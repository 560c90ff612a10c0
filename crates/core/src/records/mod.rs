//! Owner-scoped domain records.
//!
//! Every record carries its owner (`user_id`), a soft-delete flag, and
//! creation/update timestamps. Payload types (`New*`, `*Patch`) are validated
//! here before anything reaches the store.

mod account;
mod budget;
mod category;
mod kinds;
mod transaction;

pub use account::{Account, AccountPatch, NewAccount};
pub use budget::{Budget, BudgetPatch, NewBudget};
pub use category::{Category, CategoryPatch, NewCategory};
pub use kinds::{AccountKind, BudgetPeriod, EntryKind};
pub use transaction::{NewTransaction, Transaction, TransactionPatch};
