//! Settlement result models for the Finiquito Settlement Engine.
//!
//! This module contains the [`SettlementResult`] type and the intermediate
//! values it is built from: [`SeniorityResult`], [`EarningsSummary`],
//! [`BenefitLine`] and [`Diagnostic`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayrollPeriod, TerminationReason};

/// The kind of a settlement line.
///
/// The first five kinds are statutory benefits and always appear in a
/// settlement, zeroed when the termination reason does not grant them.
///
/// # Example
///
/// ```
/// use finiquito_engine::models::BenefitKind;
///
/// let kind = BenefitKind::SeveranceIndemnity;
/// assert_eq!(serde_json::to_string(&kind).unwrap(), "\"severance_indemnity\"");
/// assert!(kind.is_statutory());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitKind {
    /// Proportional year-end bonus (aguinaldo).
    YearEndBonus,
    /// Payout of unused vacation days.
    VacationPay,
    /// Severance indemnity (indemnización).
    SeveranceIndemnity,
    /// Notice-pay substitute (desahucio).
    NoticePay,
    /// Five-year seniority bonus (quinquenio).
    Quinquenio,
    /// Income tax withheld on the vacation payout (RC-IVA).
    VacationTaxWithholding,
    /// Operator-entered bonus or deduction.
    ManualAdjustment,
}

impl BenefitKind {
    /// Statutory benefits in settlement order.
    pub const STATUTORY: [BenefitKind; 5] = [
        BenefitKind::YearEndBonus,
        BenefitKind::VacationPay,
        BenefitKind::SeveranceIndemnity,
        BenefitKind::NoticePay,
        BenefitKind::Quinquenio,
    ];

    /// Returns true for the benefits a reason rule may grant.
    pub fn is_statutory(&self) -> bool {
        Self::STATUTORY.contains(self)
    }
}

/// Which earnings figure a benefit is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryBase {
    /// Three-month average of total earned.
    Average,
    /// Basic salary of the most recent payroll month.
    LatestBasicSalary,
}

/// Length of service between two dates.
///
/// # Example
///
/// ```
/// use finiquito_engine::calculation::compute_seniority;
/// use chrono::NaiveDate;
///
/// let seniority = compute_seniority(
///     NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 9, 15).unwrap(),
/// ).unwrap();
/// assert_eq!((seniority.years, seniority.months, seniority.days), (3, 6, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeniorityResult {
    /// First day of service.
    pub start_date: NaiveDate,
    /// Date service is measured up to.
    pub end_date: NaiveDate,
    /// Whole years of service.
    pub years: u32,
    /// Whole months within the last partial year.
    pub months: u32,
    /// Whole days within the last partial month.
    pub days: u32,
    /// `years + months/12 + days/365`, used for continuous proration.
    pub fractional_years: Decimal,
    /// `years*360 + months*30 + days`, the commercial day count.
    pub commercial_days: u32,
}

/// The earnings base derived from the three payroll snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsSummary {
    /// The three periods, oldest first.
    pub periods: Vec<PayrollPeriod>,
    /// Total earned per period, in the same order.
    pub monthly_totals: Vec<Decimal>,
    /// Average of `monthly_totals` at full precision.
    pub average: Decimal,
    /// Basic salary of the most recent period.
    pub latest_basic_salary: Decimal,
}

impl EarningsSummary {
    /// Returns the figure a benefit declared as its base.
    pub fn base_amount(&self, base: SalaryBase) -> Decimal {
        match base {
            SalaryBase::Average => self.average,
            SalaryBase::LatestBasicSalary => self.latest_basic_salary,
        }
    }
}

/// One named component of a settlement.
///
/// `inputs` records every value the amount was derived from, and
/// `rule_version` the rule table schedule that supplied the parameters, so a
/// historical line can be recomputed exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitLine {
    /// The kind of line.
    pub kind: BenefitKind,
    /// Label for documents.
    pub label: String,
    /// Signed amount, rounded to cents.
    pub amount: Decimal,
    /// Whether the termination reason grants this benefit.
    pub eligible: bool,
    /// Human-readable explanation of how the amount was reached.
    pub basis: String,
    /// Structured inputs used for the amount.
    pub inputs: serde_json::Value,
    /// Rule table version the parameters came from.
    pub rule_version: String,
}

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Unusual but acceptable; an operator should look at it.
    Warning,
    /// Must be resolved by an operator before the settlement is signed.
    Error,
}

/// A non-fatal finding attached to a settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// How serious the finding is.
    pub severity: Severity,
    /// A stable code identifying the kind of finding.
    pub code: String,
    /// A human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Creates a warning diagnostic.
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
        }
    }

}

/// The complete, immutable result of a settlement calculation.
///
/// Identical inputs under the same rule version always produce an identical
/// value; nothing time- or randomness-dependent is stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Person the settlement is for.
    pub person_id: String,
    /// Termination reason the rules were selected by.
    pub reason: TerminationReason,
    /// Rule table version used for every line.
    pub rule_version: String,
    /// Seniority as of the pay-through date.
    pub seniority: SeniorityResult,
    /// Earnings base.
    pub earnings: EarningsSummary,
    /// Settlement lines in computation order.
    pub benefit_lines: Vec<BenefitLine>,
    /// Sum of every line amount.
    pub total: Decimal,
    /// Every non-fatal finding, upstream stages first.
    pub diagnostics: Vec<Diagnostic>,
    /// SHA-256 of the canonical JSON of the inputs.
    pub input_fingerprint: String,
}

impl SettlementResult {
    /// Returns the first line of the given kind.
    pub fn line(&self, kind: BenefitKind) -> Option<&BenefitLine> {
        self.benefit_lines.iter().find(|line| line.kind == kind)
    }

    /// Returns true if any diagnostic carries the given code.
    pub fn has_diagnostic(&self, code: &str) -> bool {
        self.diagnostics.iter().any(|d| d.code == code)
    }
}
