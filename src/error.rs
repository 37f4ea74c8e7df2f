//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building employees,
//! loading a roster seed, or serving roster requests.

use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// Salary and statistics calculations are total and never fail; the
/// variants here cover employee construction, value limits, roster lookup
/// and roster seed loading.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidSchemeType {
///     tag: "piecework".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid scheme type: piecework");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The scheme tag is not one of the supported compensation schemes.
    #[error("Invalid scheme type: {tag}")]
    InvalidSchemeType {
        /// The tag that was rejected.
        tag: String,
    },

    /// No employee exists at the requested roster index.
    #[error("Employee not found at index {index}")]
    EmployeeNotFound {
        /// The index that was requested.
        index: usize,
    },

    /// A rate or amount is too large for salary totals to stay in range.
    #[error("{field} {value} is out of range (magnitude limit {limit})")]
    ValueOutOfRange {
        /// The field that was rejected.
        field: String,
        /// The rejected value.
        value: String,
        /// The largest accepted magnitude.
        limit: String,
    },

    /// Roster seed file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster seed file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_scheme_type_displays_tag() {
        let error = EngineError::InvalidSchemeType {
            tag: "salaried".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid scheme type: salaried");
    }

    #[test]
    fn test_employee_not_found_displays_index() {
        let error = EngineError::EmployeeNotFound { index: 7 };
        assert_eq!(error.to_string(), "Employee not found at index 7");
    }

    #[test]
    fn test_value_out_of_range_displays_field_and_limit() {
        let error = EngineError::ValueOutOfRange {
            field: "hours_per_month".to_string(),
            value: "745".to_string(),
            limit: "744".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "hours_per_month 745 is out of range (magnitude limit 744)"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/roster.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/roster.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file 'config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_scheme() -> EngineResult<()> {
            Err(EngineError::InvalidSchemeType {
                tag: "unknown".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_scheme()?;
            Ok(())
        }

        assert_eq!(
            propagates_error(),
            Err(EngineError::InvalidSchemeType {
                tag: "unknown".to_string()
            })
        );
    }
}
