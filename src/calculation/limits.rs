//! Magnitude limits for money, hours and percentages.
//!
//! Salary and statistics arithmetic is unchecked. Every value entering the
//! roster is held to these limits first, which keeps the largest possible
//! annual salary (and any realistic roster total) far inside `Decimal`'s
//! range.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::RateFields;

/// Largest magnitude accepted for a rate or a payroll item amount (10^12).
pub const MAX_MONEY: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Largest accepted hours per month (31 days of 24 hours).
pub const MAX_HOURS_PER_MONTH: u32 = 744;

/// Largest magnitude accepted for a commission percentage.
pub const MAX_COMMISSION_PERCENT: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Checks every populated rate field against its limit.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::check_rate_limits;
/// use payroll_engine::models::RateFields;
/// use rust_decimal::Decimal;
///
/// let sane = RateFields {
///     monthly_rate: Some(Decimal::new(1000, 0)),
///     ..RateFields::default()
/// };
/// assert!(check_rate_limits(&sane).is_ok());
///
/// let huge = RateFields {
///     monthly_rate: Some(Decimal::MAX),
///     ..RateFields::default()
/// };
/// assert!(check_rate_limits(&huge).is_err());
/// ```
pub fn check_rate_limits(rates: &RateFields) -> EngineResult<()> {
    check_magnitude("monthly_rate", rates.monthly_rate, MAX_MONEY)?;
    check_magnitude("hour_rate", rates.hour_rate, MAX_MONEY)?;
    check_magnitude("base_rate", rates.base_rate, MAX_MONEY)?;
    check_magnitude(
        "commission_percent",
        rates.commission_percent,
        MAX_COMMISSION_PERCENT,
    )?;

    match rates.hours_per_month {
        Some(hours) if hours > MAX_HOURS_PER_MONTH => Err(EngineError::ValueOutOfRange {
            field: "hours_per_month".to_string(),
            value: hours.to_string(),
            limit: MAX_HOURS_PER_MONTH.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Checks a payroll item amount against [`MAX_MONEY`].
pub fn check_amount_limit(amount: Decimal) -> EngineResult<()> {
    check_magnitude("amount", Some(amount), MAX_MONEY)
}

fn check_magnitude(field: &str, value: Option<Decimal>, limit: Decimal) -> EngineResult<()> {
    match value {
        Some(value) if value.abs() > limit => Err(EngineError::ValueOutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            limit: limit.to_string(),
        }),
        _ => Ok(()),
    }
}
