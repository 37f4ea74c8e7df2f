//! Compensation scheme model and rate fields.
//!
//! This module defines the closed [`CompensationScheme`] enum and the
//! [`RateFields`] an employee carries for it.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{commission_base_annual, fixed_base_annual, hourly_base_annual};
use crate::error::EngineError;

/// The rule used to compute an employee's base annual figure.
///
/// The set is closed: every calculation matches on all three variants, and
/// an unrecognised tag is rejected when parsed rather than defaulted.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CompensationScheme;
///
/// let scheme: CompensationScheme = "hourly".parse().unwrap();
/// assert_eq!(scheme, CompensationScheme::Hourly);
/// assert!("salaried".parse::<CompensationScheme>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompensationScheme {
    /// A fixed monthly salary.
    #[serde(alias = "штатный")]
    Fixed,
    /// An hourly rate times a fixed number of hours per month.
    #[serde(alias = "почасовой")]
    Hourly,
    /// A monthly base rate plus a percentage commission on the annualised base.
    #[serde(alias = "с_комиссией")]
    Commission,
}

impl CompensationScheme {
    /// All supported schemes.
    pub const ALL: [CompensationScheme; 3] = [Self::Fixed, Self::Hourly, Self::Commission];

    /// Returns the canonical tag for this scheme.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Hourly => "hourly",
            Self::Commission => "commission",
        }
    }

    /// Returns the localised tag this scheme was historically entered with.
    pub fn legacy_tag(&self) -> &'static str {
        match self {
            Self::Fixed => "штатный",
            Self::Hourly => "почасовой",
            Self::Commission => "с_комиссией",
        }
    }

    /// Computes the base annual figure from the scheme's own rate fields.
    ///
    /// Fields belonging to other schemes are ignored, and unset fields count
    /// as zero. Payroll items never take part in this figure.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{CompensationScheme, RateFields};
    /// use rust_decimal::Decimal;
    ///
    /// let rates = RateFields {
    ///     base_rate: Some(Decimal::new(500, 0)),
    ///     commission_percent: Some(Decimal::new(10, 0)),
    ///     ..RateFields::default()
    /// };
    /// assert_eq!(
    ///     CompensationScheme::Commission.base_annual(&rates),
    ///     Decimal::new(6600, 0)
    /// );
    /// ```
    pub fn base_annual(&self, rates: &RateFields) -> Decimal {
        match self {
            Self::Fixed => fixed_base_annual(rates.monthly_rate.unwrap_or_default()),
            Self::Hourly => hourly_base_annual(
                rates.hour_rate.unwrap_or_default(),
                rates.hours_per_month.unwrap_or_default(),
            ),
            Self::Commission => commission_base_annual(
                rates.base_rate.unwrap_or_default(),
                rates.commission_percent.unwrap_or_default(),
            ),
        }
    }
}

impl fmt::Display for CompensationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CompensationScheme {
    type Err = EngineError;

    /// Parses a scheme tag.
    ///
    /// Accepts the canonical tags and their legacy localised forms. Matching
    /// is exact: no trimming and no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.tag() == s || scheme.legacy_tag() == s)
            .ok_or_else(|| EngineError::InvalidSchemeType { tag: s.to_string() })
    }
}

/// Static rate fields of an employee.
///
/// Only the subset relevant to the employee's scheme is populated:
///
/// | Scheme | Fields |
/// |---|---|
/// | Fixed | `monthly_rate` |
/// | Hourly | `hour_rate`, `hours_per_month` |
/// | Commission | `base_rate`, `commission_percent` |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateFields {
    /// Monthly salary for the fixed scheme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_rate: Option<Decimal>,
    /// Hourly rate for the hourly scheme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour_rate: Option<Decimal>,
    /// Hours worked per month for the hourly scheme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_month: Option<u32>,
    /// Monthly base rate for the commission scheme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_rate: Option<Decimal>,
    /// Commission percentage (e.g. `10` for 10%) for the commission scheme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_percent: Option<Decimal>,
}

impl RateFields {
    /// Returns a copy keeping only the fields the given scheme reads.
    pub fn retain_for(&self, scheme: CompensationScheme) -> Self {
        match scheme {
            CompensationScheme::Fixed => Self {
                monthly_rate: self.monthly_rate,
                ..Self::default()
            },
            CompensationScheme::Hourly => Self {
                hour_rate: self.hour_rate,
                hours_per_month: self.hours_per_month,
                ..Self::default()
            },
            CompensationScheme::Commission => Self {
                base_rate: self.base_rate,
                commission_percent: self.commission_percent,
                ..Self::default()
            },
        }
    }
}
