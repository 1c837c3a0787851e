//! Field-level validation errors.
//!
//! A [`FieldError`] names one invalid input field using a location path,
//! a human-readable message and a machine-readable error type.

use serde::{Deserialize, Serialize};

/// Error type reported when a required field is absent.
pub const MISSING: &str = "missing";
/// Error type reported when a string cannot be parsed as a number.
pub const FLOAT_PARSING: &str = "float_parsing";
/// Error type reported when a value is neither a number nor a string.
pub const FLOAT_TYPE: &str = "float_type";
/// Error type reported when the body is not a JSON object.
pub const MODEL_ATTRIBUTES_TYPE: &str = "model_attributes_type";

/// One invalid input field.
///
/// # Example
///
/// ```
/// use shipping_calculator::models::FieldError;
///
/// let error = FieldError::missing("weight");
/// assert_eq!(error.loc, vec!["body", "weight"]);
/// assert_eq!(error.error_type, "missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path to the offending value, starting at `body`.
    pub loc: Vec<String>,
    /// Human-readable description.
    pub msg: String,
    /// Machine-readable error type.
    #[serde(rename = "type")]
    pub error_type: String,
}

impl FieldError {
    /// Creates a field error located at `body.<field>`.
    pub fn new(field: &str, msg: impl Into<String>, error_type: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: msg.into(),
            error_type: error_type.into(),
        }
    }

    /// The field was not provided.
    pub fn missing(field: &str) -> Self {
        Self::new(field, "Field required", MISSING)
    }

    /// The field was a string that does not hold a finite number.
    pub fn float_parsing(field: &str) -> Self {
        Self::new(
            field,
            "Input should be a valid number, unable to parse string as a number",
            FLOAT_PARSING,
        )
    }

    /// The field was neither a number nor a string.
    pub fn float_type(field: &str) -> Self {
        Self::new(field, "Input should be a valid number", FLOAT_TYPE)
    }

    /// The request body itself was not an object.
    pub fn not_an_object() -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg: "Input should be a valid dictionary or object to extract fields from".to_string(),
            error_type: MODEL_ATTRIBUTES_TYPE.to_string(),
        }
    }

    /// The location joined with dots, e.g. `body.weight`.
    pub fn location(&self) -> String {
        self.loc.join(".")
    }

    /// The name of the offending field, if the error is attached to one.
    pub fn field(&self) -> Option<&str> {
        match self.loc.as_slice() {
            [_, field, ..] => Some(field.as_str()),
            _ => None,
        }
    }
}
