//! Roster salary statistics.
//!
//! This module provides [`RosterStatistics`], the sum/average/max/min of
//! every employee's annual salary for one calendar year.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Aggregate annual-salary statistics over a roster for one year.
///
/// Values only: ties in `max` and `min` are not attributed to an employee.
/// The statistics are recomputed on every call and never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterStatistics {
    /// Sum of all annual salaries.
    pub sum: Decimal,
    /// Arithmetic mean of all annual salaries.
    pub average: Decimal,
    /// Highest annual salary.
    pub max: Decimal,
    /// Lowest annual salary.
    pub min: Decimal,
    /// Number of employees the statistics were computed over.
    pub count: usize,
}

impl RosterStatistics {
    /// Computes statistics over every employee's annual salary for `year`.
    ///
    /// An empty roster yields all-zero statistics rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::calculation::RosterStatistics;
    /// use payroll_engine::models::{CompensationScheme, Employee, RateFields};
    /// use rust_decimal::Decimal;
    ///
    /// let employees = vec![
    ///     Employee::new("A", "Engineer", CompensationScheme::Fixed, RateFields {
    ///         monthly_rate: Some(Decimal::new(1000, 0)),
    ///         ..RateFields::default()
    ///     }),
    ///     Employee::new("B", "Engineer", CompensationScheme::Fixed, RateFields {
    ///         monthly_rate: Some(Decimal::new(2000, 0)),
    ///         ..RateFields::default()
    ///     }),
    /// ];
    ///
    /// let stats = RosterStatistics::compute(&employees, 2024);
    /// assert_eq!(stats.sum, Decimal::new(36000, 0));
    /// assert_eq!(stats.average, Decimal::new(18000, 0));
    /// assert_eq!(stats.max, Decimal::new(24000, 0));
    /// assert_eq!(stats.min, Decimal::new(12000, 0));
    ///
    /// assert_eq!(RosterStatistics::compute(&[], 2024), RosterStatistics::default());
    /// ```
    pub fn compute(employees: &[Employee], year: i32) -> Self {
        Self::from_salaries(employees.iter().map(|employee| employee.annual_salary(year)))
    }

    /// Reduces a sequence of annual salaries into statistics.
    pub fn from_salaries(salaries: impl IntoIterator<Item = Decimal>) -> Self {
        let mut salaries = salaries.into_iter();

        let Some(first) = salaries.next() else {
            return Self::default();
        };

        let mut stats = Self {
            sum: first,
            average: Decimal::ZERO,
            max: first,
            min: first,
            count: 1,
        };

        for salary in salaries {
            stats.sum += salary;
            stats.max = stats.max.max(salary);
            stats.min = stats.min.min(salary);
            stats.count += 1;
        }

        stats.average = stats.sum / Decimal::from(stats.count);
        stats
    }
}
