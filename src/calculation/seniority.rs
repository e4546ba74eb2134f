//! Date and seniority calculation.
//!
//! This module turns a pair of dates into elapsed years, months and days the
//! way spreadsheet date-difference functions do: whole calendar months are
//! counted first (adding a month to the 31st lands on the last day of a
//! shorter month), and the remainder is an exact day count.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::SeniorityResult;

/// Day divisor used for the day component of fractional years.
pub const DAYS_PER_YEAR: u32 = 365;

/// Day count of a commercial year, used for minimum-service thresholds.
pub const COMMERCIAL_DAYS_PER_YEAR: u32 = 360;

/// Day count of a commercial month.
pub const COMMERCIAL_DAYS_PER_MONTH: u32 = 30;

/// Computes the service between a start date and a pay-through date.
///
/// # Arguments
///
/// * `start_date` - First day of service (usually the hire date)
/// * `pay_through_date` - Date service is measured up to
///
/// # Returns
///
/// Returns the [`SeniorityResult`], or `InvalidDateRange` if the
/// pay-through date precedes the start date.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::compute_seniority;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let seniority = compute_seniority(
///     NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 9, 15).unwrap(),
/// ).unwrap();
///
/// assert_eq!(seniority.years, 3);
/// assert_eq!(seniority.months, 6);
/// assert_eq!(seniority.days, 0);
/// assert_eq!(seniority.fractional_years, Decimal::from_str("3.5").unwrap());
/// ```
pub fn compute_seniority(
    start_date: NaiveDate,
    pay_through_date: NaiveDate,
) -> EngineResult<SeniorityResult> {
    let range_error = || EngineError::InvalidDateRange {
        start_date,
        pay_through_date,
    };

    if pay_through_date < start_date {
        return Err(range_error());
    }

    let (total_months, days) =
        elapsed_months_and_days(start_date, pay_through_date).ok_or_else(range_error)?;
    let years = total_months / 12;
    let months = total_months % 12;

    let fractional_years = Decimal::from(years)
        + Decimal::from(months) / Decimal::from(12)
        + Decimal::from(days) / Decimal::from(DAYS_PER_YEAR);

    Ok(SeniorityResult {
        start_date,
        end_date: pay_through_date,
        years,
        months,
        days,
        fractional_years,
        commercial_days: years * COMMERCIAL_DAYS_PER_YEAR
            + months * COMMERCIAL_DAYS_PER_MONTH
            + days,
    })
}

/// Computes service, optionally stopping one day before the pay-through date.
///
/// Some termination reasons count service up to the day before the last paid
/// day. The range is validated against the real pay-through date first, and
/// the shortened end never falls before the start date.
pub fn compute_service(
    start_date: NaiveDate,
    pay_through_date: NaiveDate,
    one_day_less: bool,
) -> EngineResult<SeniorityResult> {
    if pay_through_date < start_date {
        return Err(EngineError::InvalidDateRange {
            start_date,
            pay_through_date,
        });
    }

    let end_date = if one_day_less {
        pay_through_date
            .pred_opt()
            .map_or(start_date, |day| day.max(start_date))
    } else {
        pay_through_date
    };

    compute_seniority(start_date, end_date)
}

/// Whole months and remaining days from `start` to `end`.
///
/// Assumes `end >= start`. Returns `None` only if month arithmetic leaves the
/// representable date range.
pub(crate) fn elapsed_months_and_days(start: NaiveDate, end: NaiveDate) -> Option<(u32, u32)> {
    let month_span = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let mut total_months = u32::try_from(month_span).ok()?;

    let mut anchor = start.checked_add_months(Months::new(total_months))?;
    if anchor > end {
        total_months = total_months.checked_sub(1)?;
        anchor = start.checked_add_months(Months::new(total_months))?;
    }

    let days = u32::try_from((end - anchor).num_days()).ok()?;
    Some((total_months, days))
}
