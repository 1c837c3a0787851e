//! Error types for the shipping calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the service can raise.

use thiserror::Error;

use crate::models::FieldError;

/// The main error type for the shipping calculator.
///
/// # Example
///
/// ```
/// use shipping_calculator::error::ShippingError;
///
/// let error = ShippingError::ConfigNotFound {
///     path: "/missing/shipping.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/shipping.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ShippingError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate in the configuration is not a finite number.
    #[error("Invalid rate '{field}': {value} is not a finite number")]
    InvalidRate {
        /// The rate table field that was invalid.
        field: String,
        /// The offending value.
        value: f64,
    },

    /// The request body did not contain two numeric fields.
    #[error("Input validation failed: {}", summarize(.fields))]
    InputValidation {
        /// One entry per invalid field.
        fields: Vec<FieldError>,
    },
}

fn summarize(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{} ({})", f.location(), f.msg))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A type alias for Results that return ShippingError.
pub type ShippingResult<T> = Result<T, ShippingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ShippingError::ConfigNotFound {
            path: "/missing/shipping.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/shipping.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = ShippingError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_rate_displays_field_and_value() {
        let error = ShippingError::InvalidRate {
            field: "weight_rate".to_string(),
            value: f64::INFINITY,
        };
        assert_eq!(
            error.to_string(),
            "Invalid rate 'weight_rate': inf is not a finite number"
        );
    }

    #[test]
    fn test_input_validation_lists_every_field() {
        let error = ShippingError::InputValidation {
            fields: vec![FieldError::missing("weight"), FieldError::float_parsing("distance")],
        };
        assert_eq!(
            error.to_string(),
            "Input validation failed: body.weight (Field required), \
             body.distance (Input should be a valid number, unable to parse string as a number)"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ShippingError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> ShippingResult<()> {
            Err(ShippingError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> ShippingResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
