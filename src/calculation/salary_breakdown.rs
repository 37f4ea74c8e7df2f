//! Annual salary breakdown.
//!
//! This module explains an employee's annual salary as an ordered list of
//! audit steps: the scheme's base annual figure, then the year's payroll sum.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CompensationScheme, Employee, SalaryBreakdown};

/// Computes an employee's annual salary for `year` with its audit steps.
///
/// The resulting `annual_salary` equals [`Employee::annual_salary`] for the
/// same year.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_salary_breakdown;
/// use payroll_engine::models::{EmployeeFactory, PayrollItem, RateFields};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut employee = EmployeeFactory::create("fixed", "Ivan Ivanov", "Engineer", RateFields {
///     monthly_rate: Some(Decimal::new(1000, 0)),
///     ..RateFields::default()
/// }).unwrap();
/// employee.add_payroll_item(PayrollItem::new(
///     "Bonus",
///     Decimal::new(500, 0),
///     NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
/// ));
///
/// let breakdown = calculate_salary_breakdown(&employee, 2024);
/// assert_eq!(breakdown.base_annual, Decimal::new(12000, 0));
/// assert_eq!(breakdown.payroll_sum, Decimal::new(500, 0));
/// assert_eq!(breakdown.annual_salary, Decimal::new(12500, 0));
/// assert_eq!(breakdown.steps.len(), 2);
/// ```
pub fn calculate_salary_breakdown(employee: &Employee, year: i32) -> SalaryBreakdown {
    let base_annual = employee.base_annual();
    let payroll_sum = employee.payroll_sum_for_year(year);
    let payroll_items_counted = employee.payroll_items_for_year(year).count();

    let steps = vec![
        base_annual_step(employee, base_annual, 1),
        payroll_sum_step(year, payroll_sum, payroll_items_counted, 2),
    ];

    SalaryBreakdown {
        full_name: employee.full_name().to_string(),
        year,
        scheme: employee.scheme(),
        base_annual,
        payroll_sum,
        payroll_items_counted,
        annual_salary: base_annual + payroll_sum,
        steps,
    }
}

fn base_annual_step(employee: &Employee, base_annual: Decimal, step_number: u32) -> AuditStep {
    let rates = employee.rates();
    let scheme = employee.scheme();

    let (input, reasoning) = match scheme {
        CompensationScheme::Fixed => {
            let monthly_rate = rates.monthly_rate.unwrap_or_default();
            (
                serde_json::json!({
                    "scheme": scheme.tag(),
                    "monthly_rate": monthly_rate.normalize().to_string()
                }),
                format!(
                    "${} x 12 = ${}",
                    monthly_rate.normalize(),
                    base_annual.normalize()
                ),
            )
        }
        CompensationScheme::Hourly => {
            let hour_rate = rates.hour_rate.unwrap_or_default();
            let hours_per_month = rates.hours_per_month.unwrap_or_default();
            (
                serde_json::json!({
                    "scheme": scheme.tag(),
                    "hour_rate": hour_rate.normalize().to_string(),
                    "hours_per_month": hours_per_month
                }),
                format!(
                    "${} x {}h x 12 = ${}",
                    hour_rate.normalize(),
                    hours_per_month,
                    base_annual.normalize()
                ),
            )
        }
        CompensationScheme::Commission => {
            let base_rate = rates.base_rate.unwrap_or_default();
            let commission_percent = rates.commission_percent.unwrap_or_default();
            (
                serde_json::json!({
                    "scheme": scheme.tag(),
                    "base_rate": base_rate.normalize().to_string(),
                    "commission_percent": commission_percent.normalize().to_string()
                }),
                format!(
                    "${} x 12 + {}% commission on the annual base = ${}",
                    base_rate.normalize(),
                    commission_percent.normalize(),
                    base_annual.normalize()
                ),
            )
        }
    };

    AuditStep {
        step_number,
        rule_id: "base_annual".to_string(),
        rule_name: "Base Annual Figure".to_string(),
        input,
        output: serde_json::json!({
            "base_annual": base_annual.normalize().to_string()
        }),
        reasoning,
    }
}

fn payroll_sum_step(
    year: i32,
    payroll_sum: Decimal,
    items_counted: usize,
    step_number: u32,
) -> AuditStep {
    let reasoning = if items_counted == 0 {
        format!("No payroll items dated in {}", year)
    } else {
        format!(
            "{} payroll item(s) dated in {} sum to ${}",
            items_counted,
            year,
            payroll_sum.normalize()
        )
    };

    AuditStep {
        step_number,
        rule_id: "payroll_sum".to_string(),
        rule_name: "Payroll Items For Year".to_string(),
        input: serde_json::json!({
            "year": year
        }),
        output: serde_json::json!({
            "payroll_sum": payroll_sum.normalize().to_string(),
            "items_counted": items_counted
        }),
        reasoning,
    }
}
