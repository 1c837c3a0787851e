//! Configuration loading and management for the shipping calculator.
//!
//! This module loads the formula coefficients and server settings from a
//! YAML file, falling back to built-in defaults for anything not set.
//!
//! # Example
//!
//! ```
//! use shipping_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::default();
//! assert_eq!(config.rates().base_cost, 5.0);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_BASE_COST, DEFAULT_BIND_ADDRESS, DEFAULT_DISTANCE_RATE, DEFAULT_WEIGHT_RATE,
    RateTable, ServerConfig, ShippingConfig,
};
