//! Shipping cost calculation.
//!
//! The cost of a shipment is a flat base charge plus a charge linear in
//! weight and a charge linear in distance:
//!
//! ```text
//! cost = base_cost + weight * weight_rate + distance * distance_rate
//! ```

use crate::config::RateTable;
use crate::models::{Shipment, ShippingQuote};

/// Calculates an itemised quote for a shipment using the given rates.
///
/// No range checks are applied. Zero and negative inputs flow straight
/// through the formula and may produce reduced or negative costs.
///
/// # Examples
///
/// ```
/// use shipping_calculator::calculation::calculate_shipping_cost;
/// use shipping_calculator::config::RateTable;
/// use shipping_calculator::models::Shipment;
///
/// let quote = calculate_shipping_cost(&Shipment::new(10.0, 100.0), &RateTable::default());
/// assert_eq!(quote.weight_charge, 5.0);
/// assert_eq!(quote.distance_charge, 20.0);
/// assert_eq!(quote.cost, 30.0);
/// ```
pub fn calculate_shipping_cost(shipment: &Shipment, rates: &RateTable) -> ShippingQuote {
    let base_cost = rates.base_cost;
    let weight_charge = shipment.weight * rates.weight_rate;
    let distance_charge = shipment.distance * rates.distance_rate;

    ShippingQuote {
        base_cost,
        weight_charge,
        distance_charge,
        cost: base_cost + weight_charge + distance_charge,
    }
}

/// Returns the cost for `weight` and `distance` at the default rates.
///
/// ```
/// use shipping_calculator::calculation::shipping_cost;
///
/// assert_eq!(shipping_cost(0.0, 0.0), 5.0);
/// assert_eq!(shipping_cost(-2.0, 5.0), 5.0);
/// ```
pub fn shipping_cost(weight: f64, distance: f64) -> f64 {
    calculate_shipping_cost(&Shipment::new(weight, distance), &RateTable::default()).cost
}
