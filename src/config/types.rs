//! Configuration types for the shipping calculator.
//!
//! These structures are deserialized from the YAML configuration file.
//! Every section and field is optional and falls back to its default.

use serde::Deserialize;

use crate::error::{ShippingError, ShippingResult};

/// Default flat charge per shipment.
pub const DEFAULT_BASE_COST: f64 = 5.0;
/// Default charge per unit of weight.
pub const DEFAULT_WEIGHT_RATE: f64 = 0.5;
/// Default charge per unit of distance.
pub const DEFAULT_DISTANCE_RATE: f64 = 0.2;
/// Default socket address the server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// The coefficients of the shipping cost formula.
///
/// # Example
///
/// ```
/// use shipping_calculator::config::RateTable;
///
/// let rates = RateTable::default();
/// assert_eq!(rates.base_cost, 5.0);
/// assert_eq!(rates.weight_rate, 0.5);
/// assert_eq!(rates.distance_rate, 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RateTable {
    /// Flat charge applied to every shipment.
    pub base_cost: f64,
    /// Charge per unit of weight.
    pub weight_rate: f64,
    /// Charge per unit of distance.
    pub distance_rate: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            base_cost: DEFAULT_BASE_COST,
            weight_rate: DEFAULT_WEIGHT_RATE,
            distance_rate: DEFAULT_DISTANCE_RATE,
        }
    }
}

impl RateTable {
    /// Checks that every coefficient is finite.
    pub fn validate(&self) -> ShippingResult<()> {
        let fields = [
            ("base_cost", self.base_cost),
            ("weight_rate", self.weight_rate),
            ("distance_rate", self.distance_rate),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ShippingError::InvalidRate {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on, e.g. `0.0.0.0:8000`.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShippingConfig {
    /// Formula coefficients.
    pub rates: RateTable,
    /// Server settings.
    pub server: ServerConfig,
}
