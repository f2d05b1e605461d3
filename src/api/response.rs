//! Response types for the Trip Expense Engine API.
//!
//! This module defines the success payloads, the error response
//! structures, and the error mapping for the HTTP API.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ExpenseError;
use crate::models::ReferenceStore;

/// Everything a trip request form needs to render its selectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormData {
    /// The persisted reference lists, flattened into the payload.
    #[serde(flatten)]
    pub reference_lists: ReferenceStore,
    /// Research project names, in source order.
    pub project_names: Vec<String>,
    /// Employee names, in directory order.
    pub employees: Vec<String>,
}

/// Result of a reference list add or remove operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceMutation {
    /// Whether the store changed.
    pub changed: bool,
    /// The category's values after the operation.
    pub values: Vec<String>,
}

/// Result of a reference store validation check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the store passed validation.
    pub valid: bool,
    /// A human-readable validation message.
    pub message: String,
}

/// Result of a directory and project name reload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadSummary {
    /// Number of employees after the reload.
    pub employees: usize,
    /// Number of project names after the reload.
    pub project_names: usize,
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

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an employee not found error response.
    pub fn employee_not_found(name: &str) -> Self {
        Self::with_details(
            "EMPLOYEE_NOT_FOUND",
            format!("Employee not found: {}", name),
            "The employee name has no record in the directory",
        )
    }
}

/// Maps a JSON extraction rejection to a structured API error.
pub fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed message from serde.
            let body_text = err.body_text();
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ExpenseError> for ApiErrorResponse {
    fn from(error: ExpenseError) -> Self {
        match error {
            ExpenseError::EmployeeNotFound { name } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::employee_not_found(&name),
            },
            ExpenseError::ValidationFailed { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("VALIDATION_FAILED", message),
            },
            ExpenseError::StorePersist { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "PERSIST_ERROR",
                    "Failed to persist reference data",
                    format!("{}: {}", path, message),
                ),
            },
            // The resolution chains swallow source errors into defaults,
            // so these only surface if a loader is called directly.
            other => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("SOURCE_ERROR", "Data source error", other.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_employee_not_found_error() {
        let error = ApiError::employee_not_found("홍길동");
        assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
        assert!(error.message.contains("홍길동"));
    }

    #[test]
    fn test_employee_not_found_maps_to_404() {
        let engine_error = ExpenseError::EmployeeNotFound {
            name: "홍길동".to_string(),
        };
        let response: ApiErrorResponse = engine_error.into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "EMPLOYEE_NOT_FOUND");
    }

    #[test]
    fn test_validation_failed_maps_to_400() {
        let engine_error = ExpenseError::ValidationFailed {
            message: "category 'destinations' is empty".to_string(),
        };
        let response: ApiErrorResponse = engine_error.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_FAILED");
    }

    #[test]
    fn test_source_errors_map_to_500() {
        let engine_error = ExpenseError::SourceParse {
            path: "secrets.yaml".to_string(),
            message: "bad yaml".to_string(),
        };
        let response: ApiErrorResponse = engine_error.into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "SOURCE_ERROR");
    }

    #[test]
    fn test_form_data_flattens_reference_lists() {
        let mut store = ReferenceStore::new();
        store.insert_category("destinations", vec!["서울".to_string()]);

        let form = FormData {
            reference_lists: store,
            project_names: vec!["과제".to_string()],
            employees: vec!["이정석".to_string()],
        };

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["destinations"], serde_json::json!(["서울"]));
        assert_eq!(json["project_names"], serde_json::json!(["과제"]));
        assert_eq!(json["employees"], serde_json::json!(["이정석"]));
    }
}
