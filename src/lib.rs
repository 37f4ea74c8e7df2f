//! Payroll Calculation Engine
//!
//! This crate computes annual compensation for employees paid under a fixed,
//! hourly or commission scheme, plus dated supplemental payroll items, and
//! aggregates salary statistics across a roster.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
