//! Payroll item model.
//!
//! This module contains the [`PayrollItem`] type: a dated supplemental amount
//! (bonus, allowance, overtime top-up, deduction) that is added on top of an
//! employee's base annual figure.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dated, description-tagged supplemental amount.
///
/// Payroll items are immutable once created. The amount may be negative;
/// it is always treated as additive.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollItem;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let bonus = PayrollItem::new(
///     "Quarterly bonus",
///     Decimal::new(50000, 2),
///     NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
/// );
///
/// assert_eq!(bonus.amount(), Decimal::new(500, 0));
/// assert!(bonus.falls_in_year(2024));
/// assert!(!bonus.falls_in_year(2023));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollItem {
    description: String,
    amount: Decimal,
    date: NaiveDate,
}

impl PayrollItem {
    /// Creates a new payroll item.
    ///
    /// # Arguments
    ///
    /// * `description` - Free text, may be empty.
    /// * `amount` - The exact decimal amount; sign is unconstrained.
    /// * `date` - The calendar date the item is booked on.
    pub fn new(description: impl Into<String>, amount: Decimal, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
        }
    }

    /// Returns the description of the item.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the amount of the item.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the date the item is booked on.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns true if the item's date falls in the given calendar year.
    pub fn falls_in_year(&self, year: i32) -> bool {
        self.date.year() == year
    }
}
