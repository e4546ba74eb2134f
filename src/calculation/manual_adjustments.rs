//! Operator-entered bonuses and deductions.

use serde_json::json;

use crate::calculation::BenefitContext;
use crate::models::{BenefitKind, BenefitLine};

/// Turns each manual adjustment into a line, in input order.
///
/// Amounts pass through unchanged; a negative amount is a deduction.
pub fn adjustment_lines(ctx: &BenefitContext<'_>) -> Vec<BenefitLine> {
    ctx.case
        .manual_adjustments
        .iter()
        .enumerate()
        .map(|(index, adjustment)| {
            ctx.line(
                BenefitKind::ManualAdjustment,
                &adjustment.label,
                adjustment.amount,
                "Entered manually".to_string(),
                json!({ "position": index, "amount": adjustment.amount.to_string() }),
            )
        })
        .collect()
}
