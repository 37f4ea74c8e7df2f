//! Roster model.
//!
//! A [`Roster`] is the insertion-ordered collection of employees that front
//! ends manage and that roster statistics are computed over.

use serde::{Deserialize, Serialize};

use super::Employee;
use crate::calculation::RosterStatistics;
use crate::error::{EngineError, EngineResult};

/// An ordered collection of employees addressed by index.
///
/// Employees are never removed, so an index stays valid for the lifetime
/// of the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee and returns its index.
    pub fn add(&mut self, employee: Employee) -> usize {
        self.employees.push(employee);
        self.employees.len() - 1
    }

    /// Returns the employee at `index`, or `EmployeeNotFound`.
    pub fn get(&self, index: usize) -> EngineResult<&Employee> {
        self.employees
            .get(index)
            .ok_or(EngineError::EmployeeNotFound { index })
    }

    /// Returns the employee at `index` for appending payroll items.
    pub fn get_mut(&mut self, index: usize) -> EngineResult<&mut Employee> {
        self.employees
            .get_mut(index)
            .ok_or(EngineError::EmployeeNotFound { index })
    }

    /// Returns all employees in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Computes salary statistics for the given year over every employee.
    pub fn statistics(&self, year: i32) -> RosterStatistics {
        RosterStatistics::compute(&self.employees, year)
    }
}

impl From<Vec<Employee>> for Roster {
    fn from(employees: Vec<Employee>) -> Self {
        Self { employees }
    }
}
