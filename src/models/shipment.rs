//! Shipment and quote models.

use serde::{Deserialize, Serialize};

/// A validated shipment to be priced.
///
/// Both fields are finite. No unit or range bounds are applied: zero and
/// negative values are valid inputs to the cost formula.
///
/// # Example
///
/// ```
/// use shipping_calculator::models::Shipment;
///
/// let shipment = Shipment::new(10.0, 100.0);
/// assert_eq!(shipment.weight, 10.0);
/// assert_eq!(shipment.distance, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// The weight of the parcel.
    pub weight: f64,
    /// The distance the parcel travels.
    pub distance: f64,
}

impl Shipment {
    /// Creates a new shipment.
    pub fn new(weight: f64, distance: f64) -> Self {
        Self { weight, distance }
    }
}

/// An itemised shipping quote.
///
/// `cost` is always `base_cost + weight_charge + distance_charge`, summed
/// left to right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    /// The flat charge applied to every shipment.
    pub base_cost: f64,
    /// The charge attributable to weight.
    pub weight_charge: f64,
    /// The charge attributable to distance.
    pub distance_charge: f64,
    /// The total cost.
    pub cost: f64,
}
