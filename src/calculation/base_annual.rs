//! Base annual formulas for each compensation scheme.
//!
//! These are pure functions over static rate fields. Payroll items are added
//! by the employee on top of the figures computed here.

use rust_decimal::Decimal;

/// Number of months in a payroll year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Divisor turning a percentage figure into a fraction.
pub const PERCENT_DIVISOR: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Base annual figure for the fixed scheme: `monthly_rate × 12`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::fixed_base_annual;
/// use rust_decimal::Decimal;
///
/// assert_eq!(fixed_base_annual(Decimal::new(1000, 0)), Decimal::new(12000, 0));
/// ```
pub fn fixed_base_annual(monthly_rate: Decimal) -> Decimal {
    monthly_rate * MONTHS_PER_YEAR
}

/// Base annual figure for the hourly scheme: `hour_rate × hours_per_month × 12`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::hourly_base_annual;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = Decimal::from_str("100.50").unwrap();
/// assert_eq!(hourly_base_annual(rate, 160), Decimal::new(192960, 0));
/// ```
pub fn hourly_base_annual(hour_rate: Decimal, hours_per_month: u32) -> Decimal {
    hour_rate * Decimal::from(hours_per_month) * MONTHS_PER_YEAR
}

/// Base annual figure for the commission scheme.
///
/// The commission is a percentage of the annualised base rate only:
/// `base_rate × 12 + (base_rate × 12) × (commission_percent / 100)`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::commission_base_annual;
/// use rust_decimal::Decimal;
///
/// let annual = commission_base_annual(Decimal::new(500, 0), Decimal::new(10, 0));
/// assert_eq!(annual, Decimal::new(6600, 0));
/// ```
pub fn commission_base_annual(base_rate: Decimal, commission_percent: Decimal) -> Decimal {
    let annual_base = base_rate * MONTHS_PER_YEAR;
    let commission = annual_base * (commission_percent / PERCENT_DIVISOR);
    annual_base + commission
}
