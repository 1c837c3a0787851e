//! Request types for the shipping calculator API.
//!
//! This module defines the JSON request structure for the
//! `/shipping/calculate` endpoint.

use serde::Serialize;

use crate::models::Shipment;

/// Request body for the `/shipping/calculate` endpoint.
///
/// Incoming bodies are checked field by field in
/// [`validate_request`](super::validate_request) before this type is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShippingRequest {
    /// The weight of the parcel.
    pub weight: f64,
    /// The distance the parcel travels.
    pub distance: f64,
}

impl From<ShippingRequest> for Shipment {
    fn from(req: ShippingRequest) -> Self {
        Shipment::new(req.weight, req.distance)
    }
}
