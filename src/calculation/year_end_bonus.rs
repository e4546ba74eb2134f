//! Proportional year-end bonus (aguinaldo) calculation.
//!
//! The bonus is one month of the earnings base per full year, paid in
//! twelfths for the months worked in the termination year.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde_json::json;

use crate::calculation::money::checked_product;
use crate::calculation::seniority::{COMMERCIAL_DAYS_PER_MONTH, elapsed_months_and_days};
use crate::calculation::{BenefitContext, BenefitOutcome, round_money};
use crate::config::ProrationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{BenefitKind, Diagnostic};

/// Label of the year-end bonus line.
pub const YEAR_END_BONUS_LABEL: &str = "Year-end bonus (aguinaldo)";

/// Counts the months worked in the calendar year of the pay-through date.
///
/// Counting starts on 1 January of that year, or on the hire date if later,
/// and includes the pay-through date itself. The trailing partial month is
/// measured in commercial days (`days / 30`) and resolved by `policy`:
/// `Floor` drops it, `RoundHalfUp` counts it once 15 or more days were worked.
/// The result never exceeds 12.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::months_worked_in_year;
/// use finiquito_engine::config::ProrationPolicy;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();
/// let pay_through = NaiveDate::from_ymd_opt(2024, 9, 15).unwrap();
///
/// // 1 Jan - 15 Sep is 8 months and 15 days
/// assert_eq!(months_worked_in_year(hire, pay_through, ProrationPolicy::RoundHalfUp).unwrap(), 9);
/// assert_eq!(months_worked_in_year(hire, pay_through, ProrationPolicy::Floor).unwrap(), 8);
/// ```
pub fn months_worked_in_year(
    hire_date: NaiveDate,
    pay_through_date: NaiveDate,
    policy: ProrationPolicy,
) -> EngineResult<u32> {
    let range_error = || EngineError::InvalidDateRange {
        start_date: hire_date,
        pay_through_date,
    };

    let year_start =
        NaiveDate::from_ymd_opt(pay_through_date.year(), 1, 1).ok_or_else(range_error)?;
    let start = year_start.max(hire_date);
    let end_exclusive = pay_through_date.succ_opt().ok_or_else(range_error)?;
    if end_exclusive <= start {
        return Err(range_error());
    }

    let (months, days) = elapsed_months_and_days(start, end_exclusive).ok_or_else(range_error)?;

    let partial = match policy {
        ProrationPolicy::Floor => 0,
        ProrationPolicy::RoundHalfUp => u32::from(days * 2 >= COMMERCIAL_DAYS_PER_MONTH),
    };

    Ok((months + partial).min(12))
}

/// Calculates the proportional year-end bonus.
///
/// `base / 12 × months worked in the termination year`. The line is zeroed
/// when the reason does not grant the bonus or the case records that it was
/// already paid.
pub fn calculate_year_end_bonus(ctx: &BenefitContext<'_>) -> EngineResult<BenefitOutcome> {
    let kind = BenefitKind::YearEndBonus;
    if !ctx.reason.grants(kind) {
        return Ok(ctx.not_granted(kind, YEAR_END_BONUS_LABEL));
    }

    let year = ctx.case.pay_through_date.year();

    if ctx.case.year_end_bonus_already_paid {
        let basis = format!("{} for {} was already paid", YEAR_END_BONUS_LABEL, year);
        let mut line = ctx.line(
            kind,
            YEAR_END_BONUS_LABEL,
            Decimal::ZERO,
            basis.clone(),
            json!({ "year": year, "already_paid": true }),
        );
        line.eligible = false;
        return Ok(BenefitOutcome {
            line,
            diagnostics: vec![Diagnostic::warning("year_end_bonus_already_paid", basis)],
        });
    }

    let policy = ctx.schedule.policy.proration;
    let months =
        months_worked_in_year(ctx.seniority.start_date, ctx.case.pay_through_date, policy)?;
    let base = ctx.earnings.base_amount(ctx.schedule.year_end_bonus.base);
    let amount = round_money(
        checked_product(base, Decimal::from(months), YEAR_END_BONUS_LABEL)? / Decimal::from(12),
    );

    let basis = format!(
        "{} / 12 × {} months worked in {}",
        round_money(base),
        months,
        year
    );

    Ok(BenefitOutcome {
        line: ctx.line(
            kind,
            YEAR_END_BONUS_LABEL,
            amount,
            basis,
            json!({
                "base": ctx.schedule.year_end_bonus.base,
                "base_amount": base.to_string(),
                "year": year,
                "months_worked": months,
                "proration": policy,
            }),
        ),
        diagnostics: vec![],
    })
}
