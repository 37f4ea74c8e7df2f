//! Roster seed configuration for the Payroll Engine.
//!
//! This module loads a read-only YAML roster seed: employees, their scheme
//! tags and rate fields, and any payroll items to pre-populate.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let roster = ConfigLoader::load("./config/roster.yaml").unwrap().into_roster();
//! println!("2024 payroll total: {}", roster.statistics(2024).sum);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EmployeeConfig, RosterConfig};
