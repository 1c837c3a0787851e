//! HTTP API module for the shipping calculator.
//!
//! This module provides the REST API endpoints for quoting shipments and
//! checking service liveness.

mod handlers;
mod request;
mod response;
mod state;
mod validation;

pub use handlers::create_router;
pub use request::ShippingRequest;
pub use response::{ApiError, ApiErrorResponse, HealthResponse, SERVICE_NAME, ShippingResponse};
pub use state::AppState;
pub use validation::{REQUIRED_FIELDS, validate_request};
