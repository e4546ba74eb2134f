//! Error types for the Finiquito Settlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every fatal condition that can abort a settlement calculation.
//! Non-fatal anomalies are not errors; they are reported as
//! [`Diagnostic`](crate::models::Diagnostic) entries on the result.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::TerminationReason;

/// The main error type for the Finiquito Settlement Engine.
///
/// All fallible operations in the engine return this error type. A calculation
/// that fails is never partially computed.
///
/// # Example
///
/// ```
/// use finiquito_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rule_table.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/rule_table.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The rule table parsed but its contents are unusable.
    #[error("Invalid rule table: {message}")]
    InvalidConfig {
        /// A description of the problem.
        message: String,
    },

    /// The termination reason has no entry in the rule table.
    #[error("Termination reason not configured: {reason}")]
    ReasonNotConfigured {
        /// The reason that was requested.
        reason: TerminationReason,
    },

    /// No rule schedule is effective on the requested date.
    #[error("No rule schedule effective on {date}")]
    RuleScheduleNotFound {
        /// The date for which a schedule was requested.
        date: NaiveDate,
    },

    /// The pay-through date precedes the start of service.
    #[error("Invalid date range: pay-through date {pay_through_date} precedes start date {start_date}")]
    InvalidDateRange {
        /// The date service started.
        start_date: NaiveDate,
        /// The date service is paid through.
        pay_through_date: NaiveDate,
    },

    /// Fewer (or more) than three contiguous monthly snapshots were supplied.
    #[error("Incomplete earnings data: {message}")]
    IncompleteEarningsData {
        /// A description of what is missing.
        message: String,
    },

    /// A payroll snapshot's components do not add up to its stated total.
    #[error(
        "Inconsistent earnings data for {period}: declared total {declared} but components sum to {computed}"
    )]
    InconsistentEarningsData {
        /// The offending payroll period (`YYYY-MM`).
        period: String,
        /// The total earned stated on the snapshot.
        declared: Decimal,
        /// The sum of the snapshot's components.
        computed: Decimal,
    },

    /// A payroll snapshot carries an amount that can never be valid.
    #[error("Invalid payroll amount for {period}: {field} is {amount}")]
    InvalidPayrollAmount {
        /// The offending payroll period (`YYYY-MM`).
        period: String,
        /// The field holding the amount.
        field: String,
        /// The rejected amount.
        amount: Decimal,
    },

    /// An intermediate or final amount does not fit in a `Decimal`.
    #[error("Amount overflow while computing {context}")]
    AmountOverflow {
        /// What was being computed when the overflow happened.
        context: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
