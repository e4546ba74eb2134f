//! Earnings aggregation.
//!
//! This module merges the three most recent monthly payroll snapshots into
//! the single earnings base every benefit is computed from.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::calculation::money::checked_total;
use crate::error::{EngineError, EngineResult};
use crate::models::{Diagnostic, EarningsSummary, PayrollPeriod, PayrollSnapshot};

/// Number of monthly snapshots the average is taken over.
pub const REQUIRED_PAYROLL_MONTHS: usize = 3;

/// The result of aggregating payroll snapshots.
#[derive(Debug, Clone)]
pub struct EarningsAggregation {
    /// The earnings base.
    pub summary: EarningsSummary,
    /// Non-fatal findings about the payroll data.
    pub diagnostics: Vec<Diagnostic>,
}

/// Validates three payroll snapshots and averages their total earned.
///
/// Snapshots may be supplied in any order. They must cover three consecutive
/// months, the latest at or before the month of the pay-through date, and
/// each snapshot's total must match its components within `tolerance`.
///
/// # Arguments
///
/// * `snapshots` - Exactly three monthly payroll snapshots
/// * `pay_through_date` - Last paid day of the employment
/// * `tolerance` - Largest accepted gap between a total and its components
///
/// # Returns
///
/// Returns an [`EarningsAggregation`], or an error if:
/// - There are not exactly three consecutive months (`IncompleteEarningsData`)
/// - An amount is negative (`InvalidPayrollAmount`)
/// - A total does not match its components (`InconsistentEarningsData`)
/// - A sum of amounts does not fit in a `Decimal` (`AmountOverflow`)
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::aggregate_earnings;
/// use finiquito_engine::models::{PayrollPeriod, PayrollSnapshot};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
/// use std::str::FromStr;
///
/// let snapshot = |period: &str, total: &str| PayrollSnapshot {
///     period: PayrollPeriod::from_str(period).unwrap(),
///     basic_salary: Decimal::from_str(total).unwrap(),
///     seniority_bonus: Decimal::ZERO,
///     total_earned: Decimal::from_str(total).unwrap(),
///     other_bonuses: BTreeMap::new(),
/// };
///
/// let aggregation = aggregate_earnings(
///     &[snapshot("2024-07", "5000"), snapshot("2024-08", "5000"), snapshot("2024-09", "5500")],
///     NaiveDate::from_ymd_opt(2024, 9, 15).unwrap(),
///     Decimal::from_str("0.01").unwrap(),
/// ).unwrap();
///
/// assert_eq!(aggregation.summary.average.round_dp(2), Decimal::from_str("5166.67").unwrap());
/// ```
pub fn aggregate_earnings(
    snapshots: &[PayrollSnapshot],
    pay_through_date: NaiveDate,
    tolerance: Decimal,
) -> EngineResult<EarningsAggregation> {
    if snapshots.len() != REQUIRED_PAYROLL_MONTHS {
        return Err(EngineError::IncompleteEarningsData {
            message: format!(
                "expected {} monthly snapshots, got {}",
                REQUIRED_PAYROLL_MONTHS,
                snapshots.len()
            ),
        });
    }

    let mut ordered: Vec<&PayrollSnapshot> = snapshots.iter().collect();
    ordered.sort_by_key(|snapshot| snapshot.period);

    for pair in ordered.windows(2) {
        if pair[0].period.next() != pair[1].period {
            return Err(EngineError::IncompleteEarningsData {
                message: format!(
                    "payroll months are not consecutive: {} is followed by {}",
                    pair[0].period, pair[1].period
                ),
            });
        }
    }

    let pay_through_period = PayrollPeriod::containing(pay_through_date);
    let latest = ordered[ordered.len() - 1];
    if latest.period > pay_through_period {
        return Err(EngineError::IncompleteEarningsData {
            message: format!(
                "latest payroll month {} is after the pay-through month {}",
                latest.period, pay_through_period
            ),
        });
    }

    let mut diagnostics = Vec::new();

    for snapshot in &ordered {
        check_amounts(snapshot)?;

        let overflow = || EngineError::AmountOverflow {
            context: format!("payroll components for {}", snapshot.period),
        };
        let computed = snapshot.component_sum().ok_or_else(overflow)?;
        let difference = snapshot
            .total_earned
            .checked_sub(computed)
            .ok_or_else(overflow)?;
        if difference.abs() > tolerance {
            warn!(
                period = %snapshot.period,
                declared = %snapshot.total_earned,
                computed = %computed,
                "Payroll snapshot total does not match its components"
            );
            return Err(EngineError::InconsistentEarningsData {
                period: snapshot.period.to_string(),
                declared: snapshot.total_earned,
                computed,
            });
        }
        if !difference.is_zero() {
            diagnostics.push(Diagnostic::warning(
                "earnings_rounding_difference",
                format!(
                    "{}: total earned differs from its components by {}",
                    snapshot.period, difference
                ),
            ));
        }
    }

    let months_behind = latest.period.months_until(&pay_through_period);
    if months_behind > 1 {
        diagnostics.push(Diagnostic::warning(
            "stale_payroll",
            format!(
                "latest payroll month {} is {} months before the pay-through month {}",
                latest.period, months_behind, pay_through_period
            ),
        ));
    }

    let monthly_totals: Vec<Decimal> = ordered.iter().map(|s| s.total_earned).collect();
    let total = checked_total(monthly_totals.iter().copied(), "three-month earnings total")?;
    let average = total / Decimal::from(REQUIRED_PAYROLL_MONTHS as u64);

    Ok(EarningsAggregation {
        summary: EarningsSummary {
            periods: ordered.iter().map(|s| s.period).collect(),
            monthly_totals,
            average,
            latest_basic_salary: latest.basic_salary,
        },
        diagnostics,
    })
}

/// Rejects amounts that can never appear on a payroll.
fn check_amounts(snapshot: &PayrollSnapshot) -> EngineResult<()> {
    let fixed = [
        ("basic_salary", snapshot.basic_salary),
        ("seniority_bonus", snapshot.seniority_bonus),
        ("total_earned", snapshot.total_earned),
    ];
    let bonuses = snapshot
        .other_bonuses
        .iter()
        .map(|(name, amount)| (format!("other_bonuses.{}", name), *amount));

    for (field, amount) in fixed
        .into_iter()
        .map(|(field, amount)| (field.to_string(), amount))
        .chain(bonuses)
    {
        if amount < Decimal::ZERO {
            return Err(EngineError::InvalidPayrollAmount {
                period: snapshot.period.to_string(),
                field,
                amount,
            });
        }
    }
    Ok(())
}
