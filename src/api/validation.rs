//! Validation of `/shipping/calculate` request bodies.
//!
//! The body is first parsed as untyped JSON so that every invalid field can
//! be reported at once, rather than stopping at the first serde error.

use serde_json::{Map, Value};

use crate::models::{FieldError, Shipment};

use super::request::ShippingRequest;

/// Fields required in every request, in reporting order.
pub const REQUIRED_FIELDS: [&str; 2] = ["weight", "distance"];

/// Validates a JSON body and converts it into a [`Shipment`].
///
/// Numbers are accepted as-is and booleans count as `1.0` and `0.0`.
/// Strings are accepted when they parse as a finite number, so `"12.5"` is
/// valid but `"abc"` and `"NaN"` are not. Unknown fields are ignored.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use shipping_calculator::api::validate_request;
///
/// let shipment = validate_request(&json!({ "weight": 10, "distance": "100" })).unwrap();
/// assert_eq!(shipment.weight, 10.0);
/// assert_eq!(shipment.distance, 100.0);
///
/// let errors = validate_request(&json!({ "weight": "abc" })).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn validate_request(body: &Value) -> Result<Shipment, Vec<FieldError>> {
    let Some(object) = body.as_object() else {
        return Err(vec![FieldError::not_an_object()]);
    };

    let mut errors = Vec::new();
    let values: Vec<f64> = REQUIRED_FIELDS
        .iter()
        .filter_map(|field| read_number(object, field, &mut errors))
        .collect();

    match values.as_slice() {
        &[weight, distance] => Ok(ShippingRequest { weight, distance }.into()),
        _ => Err(errors),
    }
}

fn read_number(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let result = match object.get(field) {
        None => Err(FieldError::missing(field)),
        Some(value) => coerce_number(value, field),
    };

    result.map_err(|e| errors.push(e)).ok()
}

fn coerce_number(value: &Value, field: &str) -> Result<f64, FieldError> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .filter(|n| n.is_finite())
            .ok_or_else(|| FieldError::float_type(field)),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| FieldError::float_parsing(field)),
        Value::Bool(flag) => Ok(f64::from(u8::from(*flag))),
        _ => Err(FieldError::float_type(field)),
    }
}
