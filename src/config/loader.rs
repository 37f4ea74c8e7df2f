//! Roster seed loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for building a [`Roster`]
//! from a YAML seed file.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::calculation::{check_amount_limit, check_rate_limits};
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeFactory, Roster};

use super::types::{EmployeeConfig, RosterConfig};

/// Loads a roster seed and provides access to the resulting roster.
///
/// The seed is read once; nothing is ever written back to it.
///
/// # File Format
///
/// ```text
/// employees:
///   - scheme: fixed
///     full_name: Ivan Ivanov
///     position: Engineer
///     monthly_rate: "1000"
///     payroll_items:
///       - description: Bonus
///         amount: "500"
///         date: 2024-05-10
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/roster.yaml").unwrap();
/// println!("Loaded {} employees", loader.roster().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    roster: Roster,
}

impl ConfigLoader {
    /// Loads a roster seed from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML or has bad field types (`ConfigParseError`)
    /// - Any employee has an unknown scheme tag (`InvalidSchemeType`)
    /// - Any rate or amount exceeds the value limits (`ValueOutOfRange`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/roster.yaml")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| {
            warn!(path = %path_str, "Roster seed not found");
            EngineError::ConfigNotFound {
                path: path_str.clone(),
            }
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses a roster seed from an in-memory YAML document.
    ///
    /// `origin` names the document in errors and logs.
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<Self> {
        let config: RosterConfig = serde_yaml::from_str(content).map_err(|e| {
            warn!(path = %origin, error = %e, "Roster seed failed to parse");
            EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            }
        })?;

        let employees = config
            .employees
            .into_iter()
            .map(Self::build_employee)
            .collect::<EngineResult<Vec<_>>>()
            .inspect_err(|e| warn!(path = %origin, error = %e, "Roster seed rejected"))?;

        info!(path = %origin, employees = employees.len(), "Loaded roster seed");

        Ok(Self {
            roster: Roster::from(employees),
        })
    }

    /// Builds one employee through the factory and appends its payroll items.
    ///
    /// Rates and amounts are held to the value limits.
    fn build_employee(entry: EmployeeConfig) -> EngineResult<Employee> {
        let mut employee =
            EmployeeFactory::create(&entry.scheme, entry.full_name, entry.position, entry.rates)?;
        check_rate_limits(employee.rates())?;

        for item in entry.payroll_items {
            check_amount_limit(item.amount())?;
            employee.add_payroll_item(item);
        }

        Ok(employee)
    }

    /// Returns the loaded roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Consumes the loader and returns the roster.
    pub fn into_roster(self) -> Roster {
        self.roster
    }
}
