//! Repository abstractions for data access.
//!
//! Every repository except [`UserRepository`] is owner-scoped: each call takes
//! the acting user's id and a record owned by anyone else behaves exactly like
//! a record that does not exist.

pub mod account;
pub mod budget;
pub mod category;
mod error;
mod owned;
pub mod stats;
pub mod transaction;
pub mod user;

pub use account::{AccountFilter, AccountRepository};
pub use budget::{BudgetFilter, BudgetRepository};
pub use category::{CategoryFilter, CategoryRepository};
pub use error::StoreError;
pub use owned::OwnedEntity;
pub use stats::{MonthlySummary, StatsRepository};
pub use transaction::{TransactionFilter, TransactionRepository};
pub use user::UserRepository;
