//! Shipping calculator HTTP server.
//!
//! Environment:
//! - `SHIPPING_CONFIG`: optional path to a YAML configuration file
//! - `SHIPPING_BIND_ADDRESS`: optional override for the listen address
//! - `RUST_LOG`: log filter, defaults to `info`

use std::env;
use std::error::Error;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use shipping_calculator::api::{AppState, create_router};
use shipping_calculator::config::ConfigLoader;

const CONFIG_ENV: &str = "SHIPPING_CONFIG";
const BIND_ADDRESS_ENV: &str = "SHIPPING_BIND_ADDRESS";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let config = load_config()?;
    let bind_address = config.server().bind_address.clone();
    info!(
        bind_address = %bind_address,
        base_cost = config.rates().base_cost,
        weight_rate = config.rates().weight_rate,
        distance_rate = config.rates().distance_rate,
        "Starting shipping calculator"
    );

    let router = create_router(AppState::new(config));
    let listener = TcpListener::bind(&bind_address).await?;
    info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down");
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn load_config() -> Result<ConfigLoader, Box<dyn Error>> {
    let config = match env::var(CONFIG_ENV) {
        Ok(path) => {
            info!(path = %path, "Loading configuration");
            ConfigLoader::load(path)?
        }
        Err(_) => ConfigLoader::default(),
    };

    Ok(match env::var(BIND_ADDRESS_ENV) {
        Ok(address) => config.with_bind_address(address),
        Err(_) => config,
    })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
