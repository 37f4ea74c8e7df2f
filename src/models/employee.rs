//! Employee model.
//!
//! This module defines the [`Employee`] aggregate: identity, a compensation
//! scheme bound at construction, static rate fields, and an append-only
//! ledger of [`PayrollItem`]s.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CompensationScheme, PayrollItem, RateFields};

/// Represents an employee on the payroll.
///
/// The scheme and rate fields never change after construction. The only
/// mutation is appending payroll items, which keeps the ledger in insertion
/// order. Sharing an employee across threads requires an external lock.
///
/// Deserialization goes through [`Employee::new`], so rate fields the scheme
/// does not read are dropped there too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EmployeeRecord")]
pub struct Employee {
    full_name: String,
    position: String,
    scheme: CompensationScheme,
    #[serde(flatten)]
    rates: RateFields,
    #[serde(default)]
    payroll_items: Vec<PayrollItem>,
}

/// Serialized form of an [`Employee`].
#[derive(Deserialize)]
struct EmployeeRecord {
    full_name: String,
    position: String,
    scheme: CompensationScheme,
    #[serde(flatten)]
    rates: RateFields,
    #[serde(default)]
    payroll_items: Vec<PayrollItem>,
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        let mut employee = Employee::new(
            record.full_name,
            record.position,
            record.scheme,
            record.rates,
        );
        employee.payroll_items = record.payroll_items;
        employee
    }
}

impl Employee {
    /// Creates an employee with an empty payroll ledger.
    ///
    /// Rate fields the scheme does not read are dropped. Prefer
    /// [`EmployeeFactory`](crate::models::EmployeeFactory) when the scheme
    /// arrives as a raw tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{CompensationScheme, Employee, PayrollItem, RateFields};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let mut employee = Employee::new(
    ///     "Ivan Ivanov",
    ///     "Engineer",
    ///     CompensationScheme::Fixed,
    ///     RateFields {
    ///         monthly_rate: Some(Decimal::new(1000, 0)),
    ///         ..RateFields::default()
    ///     },
    /// );
    /// employee.add_payroll_item(PayrollItem::new(
    ///     "Bonus",
    ///     Decimal::new(500, 0),
    ///     NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
    /// ));
    ///
    /// assert_eq!(employee.annual_salary(2024), Decimal::new(12500, 0));
    /// assert_eq!(employee.annual_salary(2023), Decimal::new(12000, 0));
    /// ```
    pub fn new(
        full_name: impl Into<String>,
        position: impl Into<String>,
        scheme: CompensationScheme,
        rates: RateFields,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            position: position.into(),
            scheme,
            rates: rates.retain_for(scheme),
            payroll_items: Vec::new(),
        }
    }

    /// Returns the employee's full name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the employee's position.
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Returns the compensation scheme bound to this employee.
    pub fn scheme(&self) -> CompensationScheme {
        self.scheme
    }

    /// Returns the employee's static rate fields.
    pub fn rates(&self) -> &RateFields {
        &self.rates
    }

    /// Returns all payroll items in insertion order.
    pub fn payroll_items(&self) -> &[PayrollItem] {
        &self.payroll_items
    }

    /// Appends a payroll item to the ledger.
    pub fn add_payroll_item(&mut self, item: PayrollItem) {
        self.payroll_items.push(item);
    }

    /// Iterates the payroll items dated in the given calendar year.
    pub fn payroll_items_for_year(&self, year: i32) -> impl Iterator<Item = &PayrollItem> + '_ {
        self.payroll_items
            .iter()
            .filter(move |item| item.falls_in_year(year))
    }

    /// Sums the amounts of all payroll items dated in the given year.
    ///
    /// Returns zero when no item matches.
    pub fn payroll_sum_for_year(&self, year: i32) -> Decimal {
        self.payroll_items_for_year(year)
            .map(PayrollItem::amount)
            .sum()
    }

    /// Returns the scheme's base annual figure for this employee.
    pub fn base_annual(&self) -> Decimal {
        self.scheme.base_annual(&self.rates)
    }

    /// Computes annual salary: scheme base annual plus the year's payroll sum.
    pub fn annual_salary(&self, year: i32) -> Decimal {
        self.base_annual() + self.payroll_sum_for_year(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_fixed_employee() -> Employee {
        Employee::new(
            "Ivan Ivanov",
            "Engineer",
            CompensationScheme::Fixed,
            RateFields {
                monthly_rate: Some(dec("1000")),
                ..RateFields::default()
            },
        )
    }

    fn create_hourly_employee() -> Employee {
        Employee::new(
            "Petr Petrov",
            "Developer",
            CompensationScheme::Hourly,
            RateFields {
                hour_rate: Some(dec("100.50")),
                hours_per_month: Some(160),
                ..RateFields::default()
            },
        )
    }

    fn create_commission_employee() -> Employee {
        Employee::new(
            "Sidor Sidorov",
            "Sales Manager",
            CompensationScheme::Commission,
            RateFields {
                base_rate: Some(dec("500")),
                commission_percent: Some(dec("10")),
                ..RateFields::default()
            },
        )
    }

    #[test]
    fn test_new_employee_has_empty_ledger() {
        let employee = create_fixed_employee();
        assert!(employee.payroll_items().is_empty());
        assert_eq!(employee.full_name(), "Ivan Ivanov");
        assert_eq!(employee.position(), "Engineer");
        assert_eq!(employee.scheme(), CompensationScheme::Fixed);
    }

    #[test]
    fn test_new_drops_fields_the_scheme_does_not_read() {
        let employee = Employee::new(
            "Ivan Ivanov",
            "Engineer",
            CompensationScheme::Fixed,
            RateFields {
                monthly_rate: Some(dec("1000")),
                hour_rate: Some(dec("50")),
                ..RateFields::default()
            },
        );
        assert_eq!(employee.rates().monthly_rate, Some(dec("1000")));
        assert_eq!(employee.rates().hour_rate, None);
    }

    #[test]
    fn test_fixed_annual_salary_filters_by_year() {
        let mut employee = create_fixed_employee();
        employee.add_payroll_item(PayrollItem::new("Bonus", dec("500"), date(2024, 5, 10)));
        employee.add_payroll_item(PayrollItem::new("Overtime", dec("300"), date(2023, 12, 25)));

        assert_eq!(employee.annual_salary(2024), dec("12500"));
        assert_eq!(employee.annual_salary(2023), dec("12300"));
    }

    #[test]
    fn test_hourly_annual_salary() {
        let mut employee = create_hourly_employee();
        employee.add_payroll_item(PayrollItem::new("Bonus", dec("1000"), date(2024, 1, 15)));

        assert_eq!(employee.annual_salary(2024), dec("193960"));
    }

    #[test]
    fn test_commission_annual_salary() {
        let mut employee = create_commission_employee();
        employee.add_payroll_item(PayrollItem::new(
            "Project bonus",
            dec("2000"),
            date(2024, 6, 1),
        ));

        assert_eq!(employee.annual_salary(2024), dec("8600"));
        assert_eq!(employee.annual_salary(2023), dec("6600"));
    }

    #[test]
    fn test_commission_is_not_applied_to_payroll_items() {
        let mut employee = create_commission_employee();
        employee.add_payroll_item(PayrollItem::new("Bonus", dec("1000"), date(2024, 2, 1)));

        // 6600 + 1000, not 6600 + 1000 x 1.10
        assert_eq!(employee.annual_salary(2024), dec("7600"));
    }

    #[test]
    fn test_payroll_sum_for_year_without_items_is_zero() {
        let employee = create_fixed_employee();
        assert_eq!(employee.payroll_sum_for_year(2024), Decimal::ZERO);
    }

    #[test]
    fn test_payroll_sum_includes_negative_amounts() {
        let mut employee = create_fixed_employee();
        employee.add_payroll_item(PayrollItem::new("Bonus", dec("500"), date(2024, 5, 10)));
        employee.add_payroll_item(PayrollItem::new("Deduction", dec("-120.25"), date(2024, 7, 1)));

        assert_eq!(employee.payroll_sum_for_year(2024), dec("379.75"));
        assert_eq!(employee.annual_salary(2024), dec("12379.75"));
    }

    #[test]
    fn test_other_years_contribute_nothing() {
        let mut employee = create_fixed_employee();
        employee.add_payroll_item(PayrollItem::new("Huge", dec("1000000"), date(2025, 1, 1)));
        employee.add_payroll_item(PayrollItem::new("Huge", dec("-1000000"), date(2023, 12, 31)));

        assert_eq!(employee.payroll_sum_for_year(2024), Decimal::ZERO);
        assert_eq!(employee.annual_salary(2024), dec("12000"));
    }

    #[test]
    fn test_payroll_items_keep_insertion_order() {
        let mut employee = create_fixed_employee();
        employee.add_payroll_item(PayrollItem::new("first", dec("1"), date(2024, 12, 1)));
        employee.add_payroll_item(PayrollItem::new("second", dec("2"), date(2023, 1, 1)));
        employee.add_payroll_item(PayrollItem::new("third", dec("3"), date(2024, 1, 1)));

        let descriptions: Vec<&str> = employee
            .payroll_items()
            .iter()
            .map(PayrollItem::description)
            .collect();
        assert_eq!(descriptions, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_payroll_items_for_year_yields_only_matching_items() {
        let mut employee = create_fixed_employee();
        employee.add_payroll_item(PayrollItem::new("a", dec("1"), date(2024, 12, 1)));
        employee.add_payroll_item(PayrollItem::new("b", dec("2"), date(2023, 1, 1)));
        employee.add_payroll_item(PayrollItem::new("c", dec("3"), date(2024, 1, 1)));

        assert_eq!(employee.payroll_items_for_year(2024).count(), 2);
        assert_eq!(employee.payroll_items_for_year(2023).count(), 1);
        assert_eq!(employee.payroll_items_for_year(2022).count(), 0);
    }

    #[test]
    fn test_empty_ledger_annual_salary_equals_base_annual() {
        for employee in [
            create_fixed_employee(),
            create_hourly_employee(),
            create_commission_employee(),
        ] {
            assert_eq!(employee.annual_salary(2024), employee.base_annual());
        }
    }

    #[test]
    fn test_serialize_employee_flattens_rates() {
        let employee = create_hourly_employee();
        let json = serde_json::to_value(&employee).unwrap();

        assert_eq!(json["full_name"], "Petr Petrov");
        assert_eq!(json["scheme"], "hourly");
        assert_eq!(json["hour_rate"], "100.50");
        assert_eq!(json["hours_per_month"], 160);
        assert!(json.get("monthly_rate").is_none());
        assert_eq!(json["payroll_items"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_deserialize_drops_rate_fields_of_other_schemes() {
        let json = r#"{
            "full_name": "Sidor Sidorov",
            "position": "Sales",
            "scheme": "commission",
            "monthly_rate": "9999",
            "hour_rate": "50",
            "base_rate": "500",
            "commission_percent": "10"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(
            *employee.rates(),
            RateFields {
                base_rate: Some(dec("500")),
                commission_percent: Some(dec("10")),
                ..RateFields::default()
            }
        );
        assert!(employee.payroll_items().is_empty());
        assert_eq!(employee.annual_salary(2024), dec("6600"));
    }

    #[test]
    fn test_deserialize_keeps_payroll_items_in_order() {
        let mut original = create_fixed_employee();
        original.add_payroll_item(PayrollItem::new("Bonus", dec("500"), date(2024, 5, 10)));
        original.add_payroll_item(PayrollItem::new("Overtime", dec("300"), date(2023, 12, 25)));

        let json = serde_json::to_string(&original).unwrap();
        let restored: Employee = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
        assert_eq!(restored.payroll_items()[1].description(), "Overtime");
    }
}
