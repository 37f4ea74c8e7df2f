//! Core data models for the Payroll Engine.
//!
//! This module contains the domain models used throughout the engine:
//! payroll items, compensation schemes, employees and rosters.

mod calculation_result;
mod employee;
mod factory;
mod payroll_item;
mod roster;
mod scheme;

pub use calculation_result::{AuditStep, SalaryBreakdown};
pub use employee::Employee;
pub use factory::EmployeeFactory;
pub use payroll_item::PayrollItem;
pub use roster::Roster;
pub use scheme::{CompensationScheme, RateFields};
