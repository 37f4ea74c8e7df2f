//! Response types for the Payroll Engine API.
//!
//! This module defines the success bodies, the error response structure,
//! and the mapping from [`EngineError`] to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{CompensationScheme, Employee};

/// An employee together with its roster index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeEntry {
    /// The employee's roster index.
    pub index: usize,
    /// The employee.
    pub employee: Employee,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid scheme type error response.
    pub fn invalid_scheme_type(tag: &str) -> Self {
        let supported: Vec<&str> = CompensationScheme::ALL
            .iter()
            .map(CompensationScheme::tag)
            .collect();
        Self::with_details(
            "INVALID_SCHEME_TYPE",
            format!("Invalid scheme type: {}", tag),
            format!("Supported schemes: {}", supported.join(", ")),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response with the given error body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidSchemeType { tag } => {
                ApiErrorResponse::bad_request(ApiError::invalid_scheme_type(&tag))
            }
            EngineError::EmployeeNotFound { index } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    format!("Employee not found at index {}", index),
                    "The roster has no employee at the requested index",
                ),
            },
            EngineError::ValueOutOfRange {
                field,
                value,
                limit,
            } => ApiErrorResponse::bad_request(ApiError::with_details(
                "VALIDATION_ERROR",
                format!("{} is out of range: {}", field, value),
                format!("Accepted magnitude is at most {}", limit),
            )),
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
