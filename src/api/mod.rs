//! HTTP API module for the Finiquito Settlement Engine.
//!
//! This module provides the REST API endpoint for calculating a
//! settlement under the loaded rule table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{ENGINE_VERSION, create_router};
pub use request::SettlementRequest;
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
