//! End-to-end settlement calculation.
//!
//! Runs the stages in order: input checks, rule selection, seniority,
//! earnings, the benefit calculators and finally aggregation. Any fatal error
//! aborts the whole calculation; nothing is partially returned.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::calculation::{
    BenefitContext, adjustment_lines, aggregate_earnings, aggregate_settlement,
    calculate_indemnity, calculate_notice_pay, calculate_quinquenio, calculate_vacation_pay,
    calculate_vacation_tax, calculate_year_end_bonus, compute_service,
};
use crate::config::RuleTable;
use crate::error::EngineResult;
use crate::models::{
    BenefitKind, BenefitLine, Diagnostic, EmployeeRecord, PayrollSnapshot, SettlementResult,
    TerminationCase,
};

/// Calculates a complete settlement.
///
/// # Arguments
///
/// * `employee` - The departing employee
/// * `snapshots` - The last three monthly payroll snapshots, oldest first
/// * `case` - The termination case
/// * `table` - The rule table to apply
///
/// # Returns
///
/// The [`SettlementResult`], or the first fatal error met. Calling this twice
/// with the same inputs and rule table yields equal results.
pub fn calculate_settlement(
    employee: &EmployeeRecord,
    snapshots: &[PayrollSnapshot],
    case: &TerminationCase,
    table: &RuleTable,
) -> EngineResult<SettlementResult> {
    employee.validate()?;

    let reason = table.reason(case.reason)?;
    let schedule = table.schedule_for(case.pay_through_date)?;
    let rule_version = table.rule_version(schedule);

    debug!(
        employee = %employee.full_identifier(),
        reason = %case.reason,
        rule_version = %rule_version,
        "Calculating settlement"
    );

    let mut diagnostics = Vec::new();

    if case.request_date < employee.hire_date {
        diagnostics.push(Diagnostic::warning(
            "request_before_hire",
            format!(
                "Request date {} precedes hire date {}",
                case.request_date, employee.hire_date
            ),
        ));
    }

    let seniority = compute_service(
        employee.hire_date,
        case.pay_through_date,
        reason.one_day_less,
    )?;

    let indemnity_start = indemnity_start_date(employee.hire_date, case, &mut diagnostics);
    let indemnity_service = compute_service(
        indemnity_start,
        case.pay_through_date,
        reason.one_day_less,
    )?;

    debug!(
        years = seniority.years,
        months = seniority.months,
        days = seniority.days,
        "Seniority computed"
    );

    let earnings = aggregate_earnings(
        snapshots,
        case.pay_through_date,
        schedule.policy.earnings_tolerance,
    )?;
    diagnostics.extend(earnings.diagnostics);
    let earnings = earnings.summary;

    debug!(average = %earnings.average, "Earnings aggregated");

    let ctx = BenefitContext {
        seniority: &seniority,
        indemnity_service: &indemnity_service,
        earnings: &earnings,
        case,
        reason,
        schedule,
        rule_version: &rule_version,
    };

    let outcomes = [
        calculate_year_end_bonus(&ctx)?,
        calculate_vacation_pay(&ctx)?,
        calculate_indemnity(&ctx)?,
        calculate_notice_pay(&ctx)?,
        calculate_quinquenio(&ctx)?,
    ];

    let mut lines = Vec::with_capacity(outcomes.len() + 1 + case.manual_adjustments.len());
    for outcome in outcomes {
        lines.push(outcome.line);
        diagnostics.extend(outcome.diagnostics);
    }

    lines.extend(calculate_vacation_tax(&ctx, vacation_amount(&lines))?);
    lines.extend(adjustment_lines(&ctx));

    let aggregated = aggregate_settlement(lines, diagnostics)?;

    debug!(
        total = %aggregated.total,
        lines = aggregated.benefit_lines.len(),
        diagnostics = aggregated.diagnostics.len(),
        "Settlement aggregated"
    );

    Ok(SettlementResult {
        person_id: employee.person_id.clone(),
        reason: case.reason,
        input_fingerprint: input_fingerprint(employee, snapshots, case, &rule_version),
        rule_version,
        seniority,
        earnings,
        benefit_lines: aggregated.benefit_lines,
        total: aggregated.total,
        diagnostics: aggregated.diagnostics,
    })
}

/// SHA-256 of the canonical JSON of the inputs, as lowercase hex.
///
/// Object keys serialize in sorted order, so equal inputs always hash the same.
pub fn input_fingerprint(
    employee: &EmployeeRecord,
    snapshots: &[PayrollSnapshot],
    case: &TerminationCase,
    rule_version: &str,
) -> String {
    let canonical = json!({
        "employee": employee,
        "payroll": snapshots,
        "case": case,
        "rule_version": rule_version,
    })
    .to_string();

    format!("{:x}", Sha256::digest(canonical.as_bytes()))
}

fn indemnity_start_date(
    hire_date: NaiveDate,
    case: &TerminationCase,
    diagnostics: &mut Vec<Diagnostic>,
) -> NaiveDate {
    match case.indemnity_start_date {
        Some(start) if start < hire_date => {
            diagnostics.push(Diagnostic::warning(
                "indemnity_start_before_hire",
                format!(
                    "Indemnity start date {} precedes hire date {}; using hire date",
                    start, hire_date
                ),
            ));
            hire_date
        }
        Some(start) => start,
        None => hire_date,
    }
}

fn vacation_amount(lines: &[BenefitLine]) -> Decimal {
    lines
        .iter()
        .find(|line| line.kind == BenefitKind::VacationPay)
        .map(|line| line.amount)
        .unwrap_or_default()
}
