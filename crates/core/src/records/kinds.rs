//! Enumerated record attributes.

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Generates a closed string enum with its wire/storage names.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal, allowed = $allowed:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable lowercase name, as stored and sent over the wire.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(ValidationError::UnknownVariant {
                        field: $field,
                        allowed: $allowed,
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// Kind of money account.
    AccountKind, field = "type", allowed = "cash, bank, credit, ewallet" {
        /// Physical cash.
        Cash => "cash",
        /// Bank account.
        Bank => "bank",
        /// Credit card or credit line.
        Credit => "credit",
        /// E-wallet.
        Ewallet => "ewallet",
    }
}

string_enum! {
    /// Direction of money flow, shared by categories and transactions.
    EntryKind, field = "type", allowed = "income, expense" {
        /// Money coming in.
        Income => "income",
        /// Money going out.
        Expense => "expense",
    }
}

string_enum! {
    /// Budget recurrence period.
    BudgetPeriod, field = "period", allowed = "weekly, monthly, yearly" {
        /// Every week.
        Weekly => "weekly",
        /// Every calendar month.
        Monthly => "monthly",
        /// Every calendar year.
        Yearly => "yearly",
    }
}
