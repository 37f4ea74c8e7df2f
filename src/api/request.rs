//! Request types for the Payroll Engine API.
//!
//! This module defines the JSON request bodies and query strings accepted
//! by the roster endpoints. Amounts and dates are parsed here, so only typed
//! values reach the core.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PayrollItem, RateFields};

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// The scheme tag (e.g. "fixed", "hourly", "commission").
    pub scheme: String,
    /// The employee's full name.
    pub full_name: String,
    /// The employee's position.
    pub position: String,
    /// Rate fields for the scheme.
    #[serde(flatten)]
    pub rates: RateFields,
}

/// Request body for `POST /employees/:index/payroll-items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollItemRequest {
    /// Free-text description; may be omitted.
    #[serde(default)]
    pub description: String,
    /// The exact decimal amount.
    pub amount: Decimal,
    /// The booking date (`YYYY-MM-DD`).
    pub date: NaiveDate,
}

/// Query string carrying the calendar year, e.g. `?year=2024`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct YearQuery {
    /// The calendar year.
    pub year: i32,
}

impl From<PayrollItemRequest> for PayrollItem {
    fn from(req: PayrollItemRequest) -> Self {
        PayrollItem::new(req.description, req.amount, req.date)
    }
}
