//! Configuration types for roster seeding.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from a roster seed YAML file.

use serde::Deserialize;

use crate::models::{PayrollItem, RateFields};

/// One employee entry in a roster seed file.
///
/// The scheme is kept as a raw tag so that it goes through the same
/// validation as any other front-end input.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeConfig {
    /// The scheme tag (e.g. "fixed", "hourly", "commission").
    pub scheme: String,
    /// The employee's full name.
    pub full_name: String,
    /// The employee's position.
    pub position: String,
    /// Rate fields; only those the scheme reads are kept.
    #[serde(flatten)]
    pub rates: RateFields,
    /// Payroll items to append, in file order.
    #[serde(default)]
    pub payroll_items: Vec<PayrollItem>,
}

/// Roster seed file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Employees in roster order.
    #[serde(default)]
    pub employees: Vec<EmployeeConfig>,
}
