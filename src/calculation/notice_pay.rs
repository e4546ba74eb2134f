//! Notice-pay substitute (desahucio) calculation.

use serde_json::json;

use crate::calculation::money::checked_product;
use crate::calculation::{BenefitContext, BenefitOutcome, round_money};
use crate::error::EngineResult;
use crate::models::BenefitKind;

/// Label of the notice pay line.
pub const NOTICE_PAY_LABEL: &str = "Notice pay (desahucio)";

/// Calculates pay in lieu of notice: `base × months`, never prorated.
pub fn calculate_notice_pay(ctx: &BenefitContext<'_>) -> EngineResult<BenefitOutcome> {
    let kind = BenefitKind::NoticePay;
    if !ctx.reason.grants(kind) {
        return Ok(ctx.not_granted(kind, NOTICE_PAY_LABEL));
    }

    let rules = &ctx.schedule.notice_pay;
    let base = ctx.earnings.base_amount(rules.base);
    let amount = round_money(checked_product(base, rules.months, NOTICE_PAY_LABEL)?);

    Ok(BenefitOutcome {
        line: ctx.line(
            kind,
            NOTICE_PAY_LABEL,
            amount,
            format!("{} × {} months", round_money(base), rules.months),
            json!({
                "base": rules.base,
                "base_amount": base.to_string(),
                "months": rules.months.to_string(),
            }),
        ),
        diagnostics: vec![],
    })
}
