//! Response types for the shipping calculator API.
//!
//! This module defines the success and error response bodies and the
//! mapping from [`ShippingError`] to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ShippingError;
use crate::models::{FieldError, ShippingQuote};

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "shipping-calculator";

/// Response body for a successful `/shipping/calculate` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingResponse {
    /// The total shipping cost.
    pub cost: f64,
}

impl From<ShippingQuote> for ShippingResponse {
    fn from(quote: ShippingQuote) -> Self {
        Self { cost: quote.cost }
    }
}

/// Response body for `/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `UP` while the process is serving.
    pub status: String,
    /// The service name.
    pub service: String,
    /// The crate version.
    pub version: String,
    /// When the check ran.
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// Creates an `UP` health response stamped with the current time.
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }
    }
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
    /// The invalid fields, for validation errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            fields: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response listing the invalid fields.
    pub fn validation_error(fields: Vec<FieldError>) -> Self {
        let names: Vec<String> = fields.iter().map(FieldError::location).collect();
        Self {
            fields,
            ..Self::new(
                "VALIDATION_ERROR",
                format!("Invalid request fields: {}", names.join(", ")),
            )
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
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
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<ShippingError> for ApiErrorResponse {
    fn from(error: ShippingError) -> Self {
        match error {
            ShippingError::ConfigNotFound { path } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            ),
            ShippingError::ConfigParseError { path, message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            ),
            ShippingError::InvalidRate { field, value } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid rate configuration",
                    format!("Rate '{}' is not finite: {}", field, value),
                ),
            ),
            ShippingError::InputValidation { fields } => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::validation_error(fields),
            ),
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
        assert!(!json.contains("fields"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_validation_error_names_fields() {
        let error = ApiError::validation_error(vec![FieldError::missing("weight")]);
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("body.weight"));
        assert_eq!(error.fields.len(), 1);
    }

    #[test]
    fn test_input_validation_maps_to_422() {
        let error = ShippingError::InputValidation {
            fields: vec![FieldError::float_parsing("weight")],
        };
        let api_error: ApiErrorResponse = error.into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let error = ShippingError::InvalidRate {
            field: "base_cost".to_string(),
            value: f64::NAN,
        };
        let api_error: ApiErrorResponse = error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_shipping_response_serializes_cost_only() {
        let quote = ShippingQuote {
            base_cost: 5.0,
            weight_charge: 5.0,
            distance_charge: 20.0,
            cost: 30.0,
        };
        let json = serde_json::to_value(ShippingResponse::from(quote)).unwrap();
        assert_eq!(json, serde_json::json!({ "cost": 30.0 }));
    }

    #[test]
    fn test_health_response_is_up() {
        let health = HealthResponse::up();
        assert_eq!(health.status, "UP");
        assert_eq!(health.service, SERVICE_NAME);
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }
}
