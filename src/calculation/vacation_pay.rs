//! Vacation pay calculation.
//!
//! Unused vacation days are paid at the daily rate `base / days_per_month`.
//! The yearly entitlement grows with completed years of service through the
//! schedule's tiers.

use rust_decimal::Decimal;
use serde_json::json;

use crate::calculation::money::checked_product;
use crate::calculation::{BenefitContext, BenefitOutcome, round_money};
use crate::error::EngineResult;
use crate::models::{BenefitKind, Diagnostic};

/// Label of the vacation pay line.
pub const VACATION_PAY_LABEL: &str = "Vacation pay";

/// Calculates the payout of unused vacation days.
///
/// Days already taken are subtracted from the tier entitlement; the payable
/// count never goes below zero. Taking more days than entitled raises a
/// `vacation_overdrawn` warning.
pub fn calculate_vacation_pay(ctx: &BenefitContext<'_>) -> EngineResult<BenefitOutcome> {
    let kind = BenefitKind::VacationPay;
    if !ctx.reason.grants(kind) {
        return Ok(ctx.not_granted(kind, VACATION_PAY_LABEL));
    }

    let rules = &ctx.schedule.vacation;
    let years = ctx.seniority.years;
    let entitled = rules.entitled_days(years);
    let taken = ctx.case.vacation_days_already_taken;
    let payable = entitled.saturating_sub(taken);

    let mut diagnostics = Vec::new();
    if taken > entitled {
        diagnostics.push(Diagnostic::warning(
            "vacation_overdrawn",
            format!(
                "{} vacation days taken exceed the {} days entitled after {} years of service",
                taken, entitled, years
            ),
        ));
    }

    let base = ctx.earnings.base_amount(rules.base);
    let daily_rate = base / Decimal::from(rules.days_per_month);
    let amount = round_money(checked_product(
        daily_rate,
        Decimal::from(payable),
        VACATION_PAY_LABEL,
    )?);

    let basis = format!(
        "{} / {} × {} days ({} entitled, {} taken)",
        round_money(base),
        rules.days_per_month,
        payable,
        entitled,
        taken
    );

    Ok(BenefitOutcome {
        line: ctx.line(
            kind,
            VACATION_PAY_LABEL,
            amount,
            basis,
            json!({
                "base": rules.base,
                "base_amount": base.to_string(),
                "days_per_month": rules.days_per_month,
                "completed_years": years,
                "entitled_days": entitled,
                "days_taken": taken,
                "payable_days": payable,
            }),
        ),
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::fixtures::{Fixture, date, dec};
    use crate::error::EngineError;
    use crate::models::TerminationReason;

    fn granted() -> Fixture {
        Fixture::new(TerminationReason::Resignation, &[BenefitKind::VacationPay])
    }

    #[test]
    fn test_fifteen_days_under_five_years() {
        let outcome = calculate_vacation_pay(&granted().ctx()).unwrap();

        assert_eq!(outcome.line.amount, dec("2583.33"));
        assert_eq!(outcome.line.inputs["entitled_days"], 15);
        assert_eq!(outcome.line.inputs["payable_days"], 15);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_days_taken_are_subtracted() {
        let mut fixture = granted();
        fixture.case.vacation_days_already_taken = 5;

        let outcome = calculate_vacation_pay(&fixture.ctx()).unwrap();
        // 15500/3/30 × 10 = 1722.222...
        assert_eq!(outcome.line.amount, dec("1722.22"));
        assert_eq!(outcome.line.inputs["payable_days"], 10);
    }

    #[test]
    fn test_overdrawn_clamps_to_zero_with_warning() {
        let mut fixture = granted();
        fixture.case.vacation_days_already_taken = 20;

        let outcome = calculate_vacation_pay(&fixture.ctx()).unwrap();
        assert_eq!(outcome.line.amount, Decimal::ZERO);
        assert!(outcome.line.eligible);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].code, "vacation_overdrawn");
    }

    #[test]
    fn test_tier_changes_at_five_and_ten_years() {
        let fixture = granted().with_service(date(2019, 9, 15), date(2024, 9, 15));
        let outcome = calculate_vacation_pay(&fixture.ctx()).unwrap();
        assert_eq!(outcome.line.inputs["entitled_days"], 20);

        let fixture = granted().with_service(date(2014, 9, 15), date(2024, 9, 15));
        let outcome = calculate_vacation_pay(&fixture.ctx()).unwrap();
        assert_eq!(outcome.line.inputs["entitled_days"], 30);
        assert_eq!(outcome.line.amount, dec("5166.67"));
    }

    #[test]
    fn test_daily_rate_times_days_beyond_decimal_range_is_an_error() {
        let mut fixture = granted();
        fixture.earnings.average = dec("25000000000000000000000000000");

        match calculate_vacation_pay(&fixture.ctx()) {
            Err(EngineError::AmountOverflow { context }) => assert_eq!(context, VACATION_PAY_LABEL),
            other => panic!("Expected AmountOverflow, got {:?}", other),
        }
    }

    #[test]
    fn test_not_granted() {
        let fixture = Fixture::new(TerminationReason::Resignation, &[]);
        let outcome = calculate_vacation_pay(&fixture.ctx()).unwrap();
        assert!(!outcome.line.eligible);
        assert_eq!(outcome.line.amount, Decimal::ZERO);
    }
}
