//! Settlement aggregation.
//!
//! Sums the computed lines without recomputing any of them and attaches the
//! diagnostics raised by earlier stages.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculation::money::checked_total;
use crate::error::EngineResult;
use crate::models::{BenefitKind, BenefitLine, Diagnostic};

/// Lines, total and diagnostics of a settlement.
#[derive(Debug, Clone)]
pub struct AggregatedSettlement {
    /// Lines in the order they were given.
    pub benefit_lines: Vec<BenefitLine>,
    /// Sum of every line amount.
    pub total: Decimal,
    /// Upstream diagnostics followed by the aggregator's own.
    pub diagnostics: Vec<Diagnostic>,
}

/// Composes the final breakdown.
///
/// Raises `negative_total` when the total is below zero, and additionally
/// `manual_adjustments_negative_total` when the statutory lines alone were
/// not negative. Fails with `AmountOverflow` when the total does not fit in
/// a `Decimal`.
pub fn aggregate_settlement(
    lines: Vec<BenefitLine>,
    upstream_diagnostics: Vec<Diagnostic>,
) -> EngineResult<AggregatedSettlement> {
    let total = checked_total(lines.iter().map(|line| line.amount), "settlement total")?;
    let before_adjustments = checked_total(
        lines
            .iter()
            .filter(|line| line.kind != BenefitKind::ManualAdjustment)
            .map(|line| line.amount),
        "settlement total before adjustments",
    )?;

    let mut diagnostics = upstream_diagnostics;

    if total < Decimal::ZERO {
        warn!(total = %total, "Settlement total is negative");
        diagnostics.push(Diagnostic::warning(
            "negative_total",
            format!("Settlement total {} is negative", total),
        ));

        if before_adjustments >= Decimal::ZERO {
            diagnostics.push(Diagnostic::warning(
                "manual_adjustments_negative_total",
                format!(
                    "Manual adjustments turn a total of {} into {}",
                    before_adjustments, total
                ),
            ));
        }
    }

    Ok(AggregatedSettlement {
        benefit_lines: lines,
        total,
        diagnostics,
    })
}
