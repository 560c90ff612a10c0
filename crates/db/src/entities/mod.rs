//! `SeaORM` entity definitions.
//!
//! Enum-valued columns are stored as text; repositories parse them into the
//! domain enums and treat unknown values as corrupt rows.

pub mod accounts;
pub mod budgets;
pub mod categories;
pub mod transactions;
pub mod users;

pub mod prelude {
    //! Entity aliases.

    pub use super::accounts::Entity as Accounts;
    pub use super::budgets::Entity as Budgets;
    pub use super::categories::Entity as Categories;
    pub use super::transactions::Entity as Transactions;
    pub use super::users::Entity as Users;
}
