//! Five-year seniority bonus (quinquenio) calculation.

use rust_decimal::Decimal;
use serde_json::json;

use crate::calculation::money::checked_product;
use crate::calculation::{BenefitContext, BenefitOutcome, round_money};
use crate::error::EngineResult;
use crate::models::BenefitKind;

/// Label of the quinquenio line.
pub const QUINQUENIO_LABEL: &str = "Quinquenio";

/// Calculates the quinquenio for completed five-year brackets.
///
/// The percentage comes from the highest bracket whose year count has been
/// completed; below the first bracket the line is zero but still eligible.
pub fn calculate_quinquenio(ctx: &BenefitContext<'_>) -> EngineResult<BenefitOutcome> {
    let kind = BenefitKind::Quinquenio;
    if !ctx.reason.grants(kind) {
        return Ok(ctx.not_granted(kind, QUINQUENIO_LABEL));
    }

    let rules = &ctx.schedule.quinquenio;
    let years = ctx.seniority.years;
    let base = ctx.earnings.base_amount(rules.base);

    let (bracket_years, percent) = match rules.bracket_for(years) {
        Some(bracket) => (bracket.years, bracket.percent),
        None => (0, Decimal::ZERO),
    };
    let amount =
        round_money(checked_product(base, percent, QUINQUENIO_LABEL)? / Decimal::ONE_HUNDRED);

    let basis = if bracket_years == 0 {
        format!("{} completed years, below the first bracket", years)
    } else {
        format!(
            "{}% of {} for the {}-year bracket",
            percent,
            round_money(base),
            bracket_years
        )
    };

    Ok(BenefitOutcome {
        line: ctx.line(
            kind,
            QUINQUENIO_LABEL,
            amount,
            basis,
            json!({
                "base": rules.base,
                "base_amount": base.to_string(),
                "completed_years": years,
                "bracket_years": bracket_years,
                "percent": percent.to_string(),
            }),
        ),
        diagnostics: vec![],
    })
}
