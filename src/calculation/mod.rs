//! Calculation logic for the Payroll Engine.
//!
//! This module contains the base annual formula for each compensation
//! scheme, the explained annual-salary breakdown, roster statistics, and the
//! limits that keep those calculations within range.

mod base_annual;
mod limits;
mod salary_breakdown;
mod statistics;

pub use base_annual::{
    MONTHS_PER_YEAR, PERCENT_DIVISOR, commission_base_annual, fixed_base_annual,
    hourly_base_annual,
};
pub use limits::{
    MAX_COMMISSION_PERCENT, MAX_HOURS_PER_MONTH, MAX_MONEY, check_amount_limit, check_rate_limits,
};
pub use salary_breakdown::calculate_salary_breakdown;
pub use statistics::RosterStatistics;
