//! Calculation logic for the Finiquito Settlement Engine.
//!
//! This module contains the pure calculation stages of a settlement:
//! seniority from dates, the earnings base from payroll snapshots, one
//! calculator per benefit (year-end bonus, vacation pay, severance indemnity,
//! notice pay, quinquenio, vacation tax withholding, manual adjustments), and
//! the aggregation of their lines into a total.

mod aggregate;
mod context;
mod earnings;
mod indemnity;
mod manual_adjustments;
mod money;
mod notice_pay;
mod quinquenio;
mod seniority;
mod settlement;
mod vacation_pay;
mod vacation_tax;
mod year_end_bonus;

#[cfg(test)]
mod fixtures;

pub use aggregate::{AggregatedSettlement, aggregate_settlement};
pub use context::{BenefitContext, BenefitOutcome};
pub use earnings::{EarningsAggregation, REQUIRED_PAYROLL_MONTHS, aggregate_earnings};
pub use indemnity::{INDEMNITY_LABEL, calculate_indemnity};
pub use manual_adjustments::adjustment_lines;
pub use money::{MONEY_DECIMAL_PLACES, round_money};
pub use notice_pay::{NOTICE_PAY_LABEL, calculate_notice_pay};
pub use quinquenio::{QUINQUENIO_LABEL, calculate_quinquenio};
pub use seniority::{
    COMMERCIAL_DAYS_PER_MONTH, COMMERCIAL_DAYS_PER_YEAR, DAYS_PER_YEAR, compute_seniority,
    compute_service,
};
pub use settlement::{calculate_settlement, input_fingerprint};
pub use vacation_pay::{VACATION_PAY_LABEL, calculate_vacation_pay};
pub use vacation_tax::{VACATION_TAX_LABEL, calculate_vacation_tax};
pub use year_end_bonus::{YEAR_END_BONUS_LABEL, calculate_year_end_bonus, months_worked_in_year};
