//! Severance indemnity (indemnización) calculation.
//!
//! One month of the earnings base per year of service, prorated continuously
//! over the final partial year.

use rust_decimal::Decimal;
use serde_json::json;

use crate::calculation::money::checked_product;
use crate::calculation::{BenefitContext, BenefitOutcome, round_money};
use crate::error::EngineResult;
use crate::models::{BenefitKind, Diagnostic};

/// Label of the severance indemnity line.
pub const INDEMNITY_LABEL: &str = "Severance indemnity (indemnización)";

/// Calculates the severance indemnity.
///
/// Service is taken from `ctx.indemnity_service`, which starts at the case's
/// indemnity start date when one is given. Below the schedule's minimum
/// commercial service days the line is zero and ineligible.
///
/// # Examples
///
/// With a 5166.67 average and 3.5 years of service the indemnity is
/// `5166.67 × 3.5 = 18083.33`.
pub fn calculate_indemnity(ctx: &BenefitContext<'_>) -> EngineResult<BenefitOutcome> {
    let kind = BenefitKind::SeveranceIndemnity;
    if !ctx.reason.grants(kind) {
        return Ok(ctx.not_granted(kind, INDEMNITY_LABEL));
    }

    let rules = &ctx.schedule.indemnity;
    let service = ctx.indemnity_service;
    let base = ctx.earnings.base_amount(rules.base);

    if service.commercial_days < rules.min_service_days {
        let basis = format!(
            "{} commercial days of service, {} required",
            service.commercial_days, rules.min_service_days
        );
        let mut line = ctx.line(
            kind,
            INDEMNITY_LABEL,
            Decimal::ZERO,
            basis.clone(),
            json!({
                "service_start": service.start_date,
                "service_end": service.end_date,
                "commercial_days": service.commercial_days,
                "min_service_days": rules.min_service_days,
            }),
        );
        line.eligible = false;
        return Ok(BenefitOutcome {
            line,
            diagnostics: vec![Diagnostic::warning("indemnity_minimum_service", basis)],
        });
    }

    let amount = round_money(checked_product(base, service.fractional_years, INDEMNITY_LABEL)?);
    let basis = format!(
        "{} × {} years of service",
        round_money(base),
        service.fractional_years.round_dp(4).normalize()
    );

    Ok(BenefitOutcome {
        line: ctx.line(
            kind,
            INDEMNITY_LABEL,
            amount,
            basis,
            json!({
                "base": rules.base,
                "base_amount": base.to_string(),
                "service_start": service.start_date,
                "service_end": service.end_date,
                "years": service.years,
                "months": service.months,
                "days": service.days,
                "fractional_years": service.fractional_years.to_string(),
                "commercial_days": service.commercial_days,
            }),
        ),
        diagnostics: vec![],
    })
}
