//! Response types for the Finiquito Settlement Engine API.
//!
//! This module defines the success envelope, the error response structures
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::SettlementResult;

/// Body of a successful `/calculate` response.
///
/// The settlement itself is deterministic; the identifier and timestamp
/// belong to this particular request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Identifier of this calculation, also used as the log correlation id.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the settlement.
    pub engine_version: String,
    /// The computed settlement.
    pub settlement: SettlementResult,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Wraps an error body with status 400.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    fn internal(error: ApiError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                Self::internal(ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    message,
                ))
            }
            EngineError::InvalidConfig { .. } => Self::internal(ApiError::with_details(
                "CONFIG_ERROR",
                "Invalid rule table",
                message,
            )),
            EngineError::ReasonNotConfigured { reason } => {
                Self::bad_request(ApiError::with_details(
                    "REASON_NOT_CONFIGURED",
                    message,
                    format!("The rule table has no entry for termination reason '{}'", reason),
                ))
            }
            EngineError::RuleScheduleNotFound { date } => {
                Self::bad_request(ApiError::with_details(
                    "RULE_SCHEDULE_NOT_FOUND",
                    message,
                    format!("No rule schedule is effective on the pay-through date {}", date),
                ))
            }
            EngineError::InvalidDateRange { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_DATE_RANGE",
                message,
                "The pay-through date must not precede the hire date",
            )),
            EngineError::IncompleteEarningsData { .. } => {
                Self::bad_request(ApiError::with_details(
                    "INCOMPLETE_EARNINGS_DATA",
                    message,
                    "Exactly three consecutive monthly payroll snapshots are required",
                ))
            }
            EngineError::InconsistentEarningsData { period, .. } => {
                Self::bad_request(ApiError::with_details(
                    "INCONSISTENT_EARNINGS_DATA",
                    message,
                    format!(
                        "total_earned for {} must equal basic_salary + seniority_bonus + other_bonuses",
                        period
                    ),
                ))
            }
            EngineError::InvalidPayrollAmount { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_PAYROLL_AMOUNT",
                message,
                "Payroll amounts must not be negative",
            )),
            EngineError::AmountOverflow { .. } => Self::bad_request(ApiError::with_details(
                "AMOUNT_OVERFLOW",
                message,
                "The payroll or adjustment amounts are too large to settle",
            )),
            EngineError::InvalidEmployee { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_EMPLOYEE",
                message,
                "The employee data contains invalid information",
            )),
        }
    }
}
