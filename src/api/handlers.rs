//! HTTP request handlers for the Finiquito Settlement Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_settlement;

use super::request::SettlementRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Version reported on every calculation response.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a settlement request and returns the computed settlement wrapped
/// in a [`CalculationResponse`].
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> impl IntoResponse {
    let calculation_id = Uuid::new_v4();
    info!(calculation_id = %calculation_id, "Processing settlement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        calculation_id = %calculation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        calculation_id = %calculation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new(
                        "MISSING_CONTENT_TYPE",
                        "Content-Type must be application/json",
                    )
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let start_time = Instant::now();
    match calculate_settlement(
        &request.employee,
        &request.payroll,
        &request.case,
        state.rule_table(),
    ) {
        Ok(settlement) => {
            let duration = start_time.elapsed();
            info!(
                calculation_id = %calculation_id,
                person_id = %settlement.person_id,
                reason = %settlement.reason,
                total = %settlement.total,
                diagnostics = settlement.diagnostics.len(),
                duration_us = duration.as_micros(),
                "Settlement calculated"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(CalculationResponse {
                    calculation_id,
                    timestamp: Utc::now(),
                    engine_version: ENGINE_VERSION.to_string(),
                    settlement,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                calculation_id = %calculation_id,
                error = %err,
                "Settlement calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
