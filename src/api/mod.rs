//! HTTP API module for the Payroll Engine.
//!
//! This module exposes an in-memory roster over REST: adding employees,
//! appending payroll items, annual salary per employee, and roster
//! statistics. Raw input is parsed here; only typed values reach the core.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateEmployeeRequest, PayrollItemRequest, YearQuery};
pub use response::{ApiError, ApiErrorResponse, EmployeeEntry};
pub use state::AppState;
