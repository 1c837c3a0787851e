//! HTTP request handlers for the shipping calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::calculate_shipping_cost;
use crate::error::ShippingError;

use super::response::{ApiError, ApiErrorResponse, HealthResponse, ShippingResponse};
use super::state::AppState;
use super::validation::validate_request;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shipping/calculate", post(calculate_shipping_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /shipping/calculate endpoint.
///
/// Validates the weight and distance and returns the computed cost.
async fn calculate_shipping_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    debug!(correlation_id = %correlation_id, "Processing shipping request");

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let shipment = match validate_request(&body) {
        Ok(shipment) => shipment,
        Err(fields) => {
            let error = ShippingError::InputValidation { fields };
            warn!(correlation_id = %correlation_id, error = %error, "Validation failed");
            return ApiErrorResponse::from(error).into_response();
        }
    };

    let start_time = Instant::now();
    let quote = calculate_shipping_cost(&shipment, state.rates());
    info!(
        correlation_id = %correlation_id,
        weight = shipment.weight,
        distance = shipment.distance,
        base_cost = quote.base_cost,
        weight_charge = quote.weight_charge,
        distance_charge = quote.distance_charge,
        cost = quote.cost,
        duration_us = start_time.elapsed().as_micros(),
        "Shipping cost calculated"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ShippingResponse::from(quote)),
    )
        .into_response()
}

/// Handler for GET /health endpoint.
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::up()))
}

/// Maps a JSON extraction failure to an error response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    match rejection {
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err.body_text(),
                "JSON syntax error"
            );
            ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err.body_text())),
            )
        }
        JsonRejection::MissingJsonContentType(_) => {
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiErrorResponse::new(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
            )
        }
        other => {
            warn!(
                correlation_id = %correlation_id,
                error = %other.body_text(),
                "Failed to read request body"
            );
            ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::malformed_json("Failed to parse request body"),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigLoader, RateTable};
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::default())
    }

    fn post_json(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/shipping/calculate")
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn read_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json(r#"{"weight": 10, "distance": 100}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: ShippingResponse = read_body(response).await;
        assert_eq!(result.cost, 30.0);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router.oneshot(post_json("{invalid json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_weight_returns_422() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json(r#"{"distance": 100}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.fields.len(), 1);
        assert_eq!(error.fields[0].field(), Some("weight"));
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_415() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/shipping/calculate")
                    .body(Body::from(r#"{"weight": 1, "distance": 1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_configured_rates_are_used() {
        let config = ConfigLoader::from_yaml_str("rates:\n  base_cost: 0.0\n").unwrap();
        let router = create_router(AppState::new(config));

        let response = router
            .oneshot(post_json(r#"{"weight": 10, "distance": 100}"#))
            .await
            .unwrap();

        let result: ShippingResponse = read_body(response).await;
        let defaults = RateTable::default();
        assert_eq!(
            result.cost,
            0.0 + 10.0 * defaults.weight_rate + 100.0 * defaults.distance_rate
        );
    }

    #[tokio::test]
    async fn test_health_returns_up() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = read_body(response).await;
        assert_eq!(health.status, "UP");
    }
}
