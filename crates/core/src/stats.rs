//! Read-only aggregate views.
//!
//! Everything here works on already-filtered inputs: callers pass only the
//! caller's active records. Sums use `Decimal`; an empty input sums to zero.

use chrono::{Datelike, Local, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::records::EntryKind;

/// A calendar month as the half-open date range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    /// First day of the month.
    pub start: NaiveDate,
    /// First day of the following month.
    pub end: NaiveDate,
}

impl MonthWindow {
    /// The month containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    /// The current month, using the server's local calendar.
    #[must_use]
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    /// Whether `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// `YYYY-MM` label.
    #[must_use]
    pub fn label(&self) -> String {
        self.start.format("%Y-%m").to_string()
    }
}

/// Income and expense totals for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct IncomeExpenseTotals {
    /// Sum of income amounts.
    pub income: Decimal,
    /// Sum of expense amounts.
    pub expense: Decimal,
}

impl IncomeExpenseTotals {
    /// Partitions `(kind, amount)` pairs by kind and sums each side.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (EntryKind, Decimal)>,
    {
        entries
            .into_iter()
            .fold(Self::default(), |mut totals, (kind, amount)| {
                match kind {
                    EntryKind::Income => totals.income += amount,
                    EntryKind::Expense => totals.expense += amount,
                }
                totals
            })
    }

    /// Income minus expense.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }
}

/// Balance summed across accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
pub struct TotalBalance {
    /// Sum of balances, each with its stored sign.
    pub total: Decimal,
    /// Number of accounts summed.
    pub account_count: usize,
}

impl TotalBalance {
    /// Sums balances as stored. Credit accounts are not negated.
    pub fn from_balances<I>(balances: I) -> Self
    where
        I: IntoIterator<Item = Decimal>,
    {
        balances
            .into_iter()
            .fold(Self::default(), |acc, balance| Self {
                total: acc.total + balance,
                account_count: acc.account_count + 1,
            })
    }
}
