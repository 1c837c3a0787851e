//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shipping
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ShippingError, ShippingResult};

use super::types::{RateTable, ServerConfig, ShippingConfig};

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// rates:
///   base_cost: 5.0
///   weight_rate: 0.5
///   distance_rate: 0.2
/// server:
///   bind_address: "0.0.0.0:8000"
/// ```
///
/// Both sections are optional. [`ConfigLoader::default`] provides the
/// built-in rates without reading any file.
///
/// # Example
///
/// ```no_run
/// use shipping_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/shipping.yaml").unwrap();
/// println!("Base cost: {}", loader.rates().base_cost);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ShippingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML for this schema (`ConfigParseError`)
    /// - A rate is NaN or infinite (`InvalidRate`)
    pub fn load<P: AsRef<Path>>(path: P) -> ShippingResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ShippingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content).map_err(|e| match e {
            ShippingError::ConfigParseError { message, .. } => ShippingError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, rates = ?loader.rates(), "Loaded configuration");
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml_str(content: &str) -> ShippingResult<Self> {
        let config: ShippingConfig = if content.trim().is_empty() {
            ShippingConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| ShippingError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?
        };

        config.rates.validate()?;
        Ok(Self { config })
    }

    /// Returns the formula coefficients.
    pub fn rates(&self) -> &RateTable {
        &self.config.rates
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Replaces the bind address, e.g. from an environment override.
    pub fn with_bind_address(mut self, bind_address: impl Into<String>) -> Self {
        self.config.server.bind_address = bind_address.into();
        self
    }
}
