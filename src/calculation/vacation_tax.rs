//! Income tax withheld on the vacation payout (RC-IVA).

use rust_decimal::Decimal;
use serde_json::json;

use crate::calculation::money::checked_product;
use crate::calculation::{BenefitContext, round_money};
use crate::error::EngineResult;
use crate::models::{BenefitKind, BenefitLine};

/// Label of the withholding line.
pub const VACATION_TAX_LABEL: &str = "RC-IVA on vacation pay";

/// Returns the negative withholding line for a vacation payout.
///
/// Produced only when the case asks for withholding and the vacation amount
/// is positive.
pub fn calculate_vacation_tax(
    ctx: &BenefitContext<'_>,
    vacation_amount: Decimal,
) -> EngineResult<Option<BenefitLine>> {
    if !ctx.case.withhold_vacation_tax || vacation_amount <= Decimal::ZERO {
        return Ok(None);
    }

    let rate = ctx.schedule.vacation_tax.rate;
    let amount = -round_money(checked_product(vacation_amount, rate, VACATION_TAX_LABEL)?);

    Ok(Some(ctx.line(
        BenefitKind::VacationTaxWithholding,
        VACATION_TAX_LABEL,
        amount,
        format!("{} × {} withheld", vacation_amount, rate),
        json!({
            "vacation_amount": vacation_amount.to_string(),
            "rate": rate.to_string(),
        }),
    )))
}
