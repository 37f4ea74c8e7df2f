//! Employee construction from raw scheme tags.

use super::{CompensationScheme, Employee, RateFields};
use crate::error::EngineResult;

/// Builds employees from a scheme tag and rate arguments.
///
/// The tag is validated against the closed set of schemes before anything
/// is constructed, and only the rate fields the chosen scheme reads are
/// kept on the resulting employee.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeFactory;

impl EmployeeFactory {
    /// Creates an employee from a raw scheme tag.
    ///
    /// # Arguments
    ///
    /// * `scheme_tag` - `fixed`, `hourly` or `commission` (or a legacy localised tag)
    /// * `full_name` - The employee's full name
    /// * `position` - Free-text position
    /// * `rates` - Rate arguments; fields the scheme does not read are dropped
    ///
    /// # Returns
    ///
    /// A fully formed employee with an empty payroll ledger, or
    /// `InvalidSchemeType` if the tag is not recognised.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::error::EngineError;
    /// use payroll_engine::models::{EmployeeFactory, RateFields};
    /// use rust_decimal::Decimal;
    ///
    /// let rates = RateFields {
    ///     monthly_rate: Some(Decimal::new(1000, 0)),
    ///     ..RateFields::default()
    /// };
    ///
    /// let employee = EmployeeFactory::create("fixed", "Ivan Ivanov", "Engineer", rates)?;
    /// assert_eq!(employee.annual_salary(2024), Decimal::new(12000, 0));
    ///
    /// let rejected = EmployeeFactory::create("salaried", "Ivan Ivanov", "Engineer", rates);
    /// assert!(matches!(rejected, Err(EngineError::InvalidSchemeType { .. })));
    /// # Ok::<(), EngineError>(())
    /// ```
    pub fn create(
        scheme_tag: &str,
        full_name: impl Into<String>,
        position: impl Into<String>,
        rates: RateFields,
    ) -> EngineResult<Employee> {
        let scheme: CompensationScheme = scheme_tag.parse()?;
        Ok(Self::create_with_scheme(scheme, full_name, position, rates))
    }

    /// Creates an employee from an already-typed scheme. Cannot fail.
    pub fn create_with_scheme(
        scheme: CompensationScheme,
        full_name: impl Into<String>,
        position: impl Into<String>,
        rates: RateFields,
    ) -> Employee {
        Employee::new(full_name, position, scheme, rates)
    }
}
