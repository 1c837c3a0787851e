//! Core data models for the shipping calculator.

mod field_error;
mod shipment;

pub use field_error::{FLOAT_PARSING, FLOAT_TYPE, FieldError, MISSING, MODEL_ATTRIBUTES_TYPE};
pub use shipment::{Shipment, ShippingQuote};
