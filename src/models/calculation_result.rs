//! Calculation result models for the Payroll Engine.
//!
//! This module contains the [`SalaryBreakdown`] type and its [`AuditStep`]s,
//! which explain how an employee's annual salary for one year was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CompensationScheme;

/// A single step in a salary breakdown recording one calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied (e.g. "base_annual").
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The explained result of one annual-salary calculation.
///
/// `annual_salary` always equals `base_annual + payroll_sum`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CompensationScheme, SalaryBreakdown};
/// use rust_decimal::Decimal;
///
/// let breakdown = SalaryBreakdown {
///     full_name: "Ivan Ivanov".to_string(),
///     year: 2024,
///     scheme: CompensationScheme::Fixed,
///     base_annual: Decimal::new(12000, 0),
///     payroll_sum: Decimal::new(500, 0),
///     payroll_items_counted: 1,
///     annual_salary: Decimal::new(12500, 0),
///     steps: vec![],
/// };
/// assert_eq!(breakdown.annual_salary, breakdown.base_annual + breakdown.payroll_sum);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The employee the calculation is for.
    pub full_name: String,
    /// The calendar year the salary was computed for.
    pub year: i32,
    /// The scheme that produced the base annual figure.
    pub scheme: CompensationScheme,
    /// The scheme-only contribution.
    pub base_annual: Decimal,
    /// The sum of payroll items dated in `year`.
    pub payroll_sum: Decimal,
    /// How many payroll items were dated in `year`.
    pub payroll_items_counted: usize,
    /// The annual salary.
    pub annual_salary: Decimal,
    /// Ordered calculation steps.
    pub steps: Vec<AuditStep>,
}
