//! Calculation logic for the shipping calculator.
//!
//! This module contains the pure cost formula. It holds no state and can be
//! called concurrently from any number of request handlers.

mod shipping_cost;

pub use shipping_cost::{calculate_shipping_cost, shipping_cost};
