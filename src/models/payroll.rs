//! Payroll snapshot models.
//!
//! This module contains the [`PayrollPeriod`] and [`PayrollSnapshot`] types that
//! carry one month of payroll figures into the earnings aggregator.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A calendar month identifying a payroll run, written `YYYY-MM`.
///
/// # Example
///
/// ```
/// use finiquito_engine::models::PayrollPeriod;
/// use std::str::FromStr;
///
/// let period = PayrollPeriod::from_str("2024-12").unwrap();
/// assert_eq!(period.next().to_string(), "2025-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayrollPeriod {
    year: i32,
    month: u32,
}

impl PayrollPeriod {
    /// Creates a period, returning `None` if the month is not in `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Returns the period a date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The calendar month, 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the following month.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Number of months from `self` forward to `later` (negative if `later` is earlier).
    pub fn months_until(&self, later: &PayrollPeriod) -> i64 {
        later.ordinal() - self.ordinal()
    }

    fn ordinal(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }
}

impl fmt::Display for PayrollPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for PayrollPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("invalid payroll period '{}': expected YYYY-MM", s))?;
        if year.len() != 4 || month.len() != 2 {
            return Err(format!("invalid payroll period '{}': expected YYYY-MM", s));
        }
        let year: i32 = year
            .parse()
            .map_err(|_| format!("invalid year in payroll period '{}'", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("invalid month in payroll period '{}'", s))?;
        Self::new(year, month)
            .ok_or_else(|| format!("month out of range in payroll period '{}'", s))
    }
}

impl TryFrom<String> for PayrollPeriod {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PayrollPeriod> for String {
    fn from(period: PayrollPeriod) -> Self {
        period.to_string()
    }
}

/// One month of payroll figures for the departing employee.
///
/// `total_earned` is expected to equal `basic_salary + seniority_bonus`
/// plus every entry of `other_bonuses`. The aggregator rejects snapshots
/// where it does not.
///
/// # Example
///
/// ```
/// use finiquito_engine::models::{PayrollPeriod, PayrollSnapshot};
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
/// use std::str::FromStr;
///
/// let snapshot = PayrollSnapshot {
///     period: PayrollPeriod::from_str("2024-07").unwrap(),
///     basic_salary: Decimal::from_str("4500.00").unwrap(),
///     seniority_bonus: Decimal::from_str("300.00").unwrap(),
///     total_earned: Decimal::from_str("5000.00").unwrap(),
///     other_bonuses: BTreeMap::from([
///         ("transport".to_string(), Decimal::from_str("200.00").unwrap()),
///     ]),
/// };
/// assert_eq!(snapshot.consistency_difference(), Some(Decimal::ZERO));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSnapshot {
    /// The payroll month.
    pub period: PayrollPeriod,
    /// Basic salary (haber básico).
    pub basic_salary: Decimal,
    /// Seniority bonus (bono de antigüedad).
    pub seniority_bonus: Decimal,
    /// Total earned for the month as stated by payroll.
    pub total_earned: Decimal,
    /// Itemized other bonuses, keyed by name.
    #[serde(default)]
    pub other_bonuses: BTreeMap<String, Decimal>,
}

impl PayrollSnapshot {
    /// Sum of the itemized components of the month.
    ///
    /// `None` when the sum does not fit in a `Decimal`.
    pub fn component_sum(&self) -> Option<Decimal> {
        self.other_bonuses
            .values()
            .try_fold(self.basic_salary.checked_add(self.seniority_bonus)?, |acc, bonus| {
                acc.checked_add(*bonus)
            })
    }

    /// Stated total minus the component sum, `None` on overflow.
    pub fn consistency_difference(&self) -> Option<Decimal> {
        self.total_earned.checked_sub(self.component_sum()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_and_display_period() {
        let period = PayrollPeriod::from_str("2024-03").unwrap();
        assert_eq!(period.year(), 2024);
        assert_eq!(period.month(), 3);
        assert_eq!(period.to_string(), "2024-03");
    }

    #[test]
    fn test_parse_rejects_malformed_periods() {
        assert!(PayrollPeriod::from_str("2024-13").is_err());
        assert!(PayrollPeriod::from_str("2024-00").is_err());
        assert!(PayrollPeriod::from_str("2024/03").is_err());
        assert!(PayrollPeriod::from_str("24-03").is_err());
        assert!(PayrollPeriod::from_str("2024-3").is_err());
    }

    #[test]
    fn test_next_rolls_over_year() {
        let december = PayrollPeriod::new(2023, 12).unwrap();
        assert_eq!(december.next(), PayrollPeriod::new(2024, 1).unwrap());
    }

    #[test]
    fn test_months_until() {
        let july = PayrollPeriod::new(2024, 7).unwrap();
        let february = PayrollPeriod::new(2025, 2).unwrap();
        assert_eq!(july.months_until(&february), 7);
        assert_eq!(february.months_until(&july), -7);
    }

    #[test]
    fn test_containing_date() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 15).unwrap();
        assert_eq!(PayrollPeriod::containing(date).to_string(), "2024-09");
    }

    #[test]
    fn test_period_serializes_as_string() {
        let period = PayrollPeriod::new(2024, 9).unwrap();
        assert_eq!(serde_json::to_string(&period).unwrap(), "\"2024-09\"");

        let parsed: PayrollPeriod = serde_json::from_str("\"2024-09\"").unwrap();
        assert_eq!(parsed, period);

        assert!(serde_json::from_str::<PayrollPeriod>("\"2024-9\"").is_err());
    }

    #[test]
    fn test_deserialize_snapshot_without_other_bonuses() {
        let json = r#"{
            "period": "2024-07",
            "basic_salary": "4700.00",
            "seniority_bonus": "300.00",
            "total_earned": "5000.00"
        }"#;

        let snapshot: PayrollSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.other_bonuses.is_empty());
        assert_eq!(snapshot.component_sum(), Some(dec("5000.00")));
    }

    #[test]
    fn test_consistency_difference_reports_shortfall() {
        let snapshot = PayrollSnapshot {
            period: PayrollPeriod::new(2024, 7).unwrap(),
            basic_salary: dec("4500.00"),
            seniority_bonus: dec("300.00"),
            total_earned: dec("5000.00"),
            other_bonuses: BTreeMap::from([("meal".to_string(), dec("150.00"))]),
        };

        assert_eq!(snapshot.component_sum(), Some(dec("4950.00")));
        assert_eq!(snapshot.consistency_difference(), Some(dec("50.00")));
    }

    #[test]
    fn test_component_sum_overflow_is_none() {
        let huge = dec("50000000000000000000000000000");
        let snapshot = PayrollSnapshot {
            period: PayrollPeriod::new(2024, 7).unwrap(),
            basic_salary: huge,
            seniority_bonus: huge,
            total_earned: huge,
            other_bonuses: BTreeMap::new(),
        };

        assert_eq!(snapshot.component_sum(), None);
        assert_eq!(snapshot.consistency_difference(), None);
    }
}
