//! Shipping Cost Estimation Service
//!
//! This crate computes shipping cost estimates from a parcel's weight and
//! travel distance and exposes the calculation over a single HTTP endpoint.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
