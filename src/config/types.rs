//! Configuration types for the benefit rule table.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the rule table's YAML files.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{BenefitKind, SalaryBase, TerminationReason};

/// Metadata identifying the rule table.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleTableMetadata {
    /// Short code used as the prefix of every rule version.
    pub code: String,
    /// Human-readable name of the rule table.
    pub name: String,
    /// Jurisdiction the rules implement.
    pub jurisdiction: String,
    /// Legal source the rules were transcribed from.
    pub source: String,
}

/// What a termination reason grants.
#[derive(Debug, Clone, Deserialize)]
pub struct ReasonRule {
    /// Human-readable description of the reason.
    pub description: String,
    /// Statutory benefits granted for this reason.
    pub benefits: Vec<BenefitKind>,
    /// Count service up to the day before the pay-through date.
    #[serde(default)]
    pub one_day_less: bool,
}

impl ReasonRule {
    /// Returns true if the reason grants the given benefit.
    pub fn grants(&self, kind: BenefitKind) -> bool {
        self.benefits.contains(&kind)
    }
}

/// The reasons.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ReasonsConfig {
    /// Map of reason code to its rule.
    pub reasons: HashMap<TerminationReason, ReasonRule>,
}

/// How the partial final month of a proration is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProrationPolicy {
    /// Drop the partial month.
    Floor,
    /// Count the partial month once half of it has been worked.
    RoundHalfUp,
}

/// Policies shared by every calculator.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationPolicy {
    /// Partial-month handling for the year-end bonus.
    pub proration: ProrationPolicy,
    /// Largest accepted gap between a snapshot's total and its components.
    pub earnings_tolerance: Decimal,
}

/// Year-end bonus parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct YearEndBonusRules {
    /// Earnings figure the bonus is computed from.
    pub base: SalaryBase,
}

/// A vacation entitlement bracket.
#[derive(Debug, Clone, Deserialize)]
pub struct VacationTier {
    /// Completed years of service from which the tier applies.
    pub min_years: u32,
    /// Vacation days granted per year in this tier.
    pub days: u32,
}

/// Vacation pay parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct VacationRules {
    /// Earnings figure the daily rate is derived from.
    pub base: SalaryBase,
    /// Divisor turning the monthly base into a daily rate.
    pub days_per_month: u32,
    /// Entitlement brackets, ascending by `min_years`.
    pub tiers: Vec<VacationTier>,
}

impl VacationRules {
    /// Returns the vacation days granted for the given completed years.
    pub fn entitled_days(&self, years: u32) -> u32 {
        self.tiers
            .iter()
            .rev()
            .find(|tier| tier.min_years <= years)
            .map(|tier| tier.days)
            .unwrap_or(0)
    }
}

/// Severance indemnity parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct IndemnityRules {
    /// Earnings figure paid per year of service.
    pub base: SalaryBase,
    /// Commercial days of service required before any indemnity is owed.
    pub min_service_days: u32,
}

/// Notice-pay substitute parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct NoticePayRules {
    /// Earnings figure paid per month of notice.
    pub base: SalaryBase,
    /// Months of pay owed in lieu of notice.
    pub months: Decimal,
}

/// A step of the quinquenio schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct QuinquenioBracket {
    /// Completed years of service that open the bracket.
    pub years: u32,
    /// Percentage of the base paid in this bracket.
    pub percent: Decimal,
}

/// Five-year seniority bonus parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct QuinquenioRules {
    /// Earnings figure the percentage applies to.
    pub base: SalaryBase,
    /// Size of a bracket in years.
    pub bracket_years: u32,
    /// Percentage per bracket, ascending by `years`.
    pub schedule: Vec<QuinquenioBracket>,
}

impl QuinquenioRules {
    /// Returns the completed bracket and its percentage, if any.
    pub fn bracket_for(&self, years: u32) -> Option<&QuinquenioBracket> {
        let completed = years / self.bracket_years * self.bracket_years;
        self.schedule
            .iter()
            .rev()
            .find(|bracket| bracket.years <= completed)
    }
}

/// Vacation income-tax withholding parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct VacationTaxRules {
    /// Fraction of the vacation payout withheld.
    pub rate: Decimal,
}

/// A set of benefit parameters effective from a given date.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSchedule {
    /// Version label of the schedule.
    pub version: String,
    /// First pay-through date the schedule applies to.
    pub effective_date: NaiveDate,
    /// Shared calculation policies.
    pub policy: CalculationPolicy,
    /// Year-end bonus parameters.
    pub year_end_bonus: YearEndBonusRules,
    /// Vacation pay parameters.
    pub vacation: VacationRules,
    /// Severance indemnity parameters.
    pub indemnity: IndemnityRules,
    /// Notice-pay parameters.
    pub notice_pay: NoticePayRules,
    /// Quinquenio parameters.
    pub quinquenio: QuinquenioRules,
    /// Vacation tax parameters.
    pub vacation_tax: VacationTaxRules,
}

impl RuleSchedule {
    fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| EngineError::InvalidConfig {
            message: format!("schedule {}: {}", self.version, message),
        };

        if self.policy.earnings_tolerance < Decimal::ZERO {
            return Err(invalid("earnings_tolerance must not be negative".to_string()));
        }
        if self.vacation.days_per_month == 0 {
            return Err(invalid("vacation.days_per_month must be positive".to_string()));
        }
        if self.vacation.tiers.is_empty() {
            return Err(invalid("vacation.tiers must not be empty".to_string()));
        }
        if !self
            .vacation
            .tiers
            .windows(2)
            .all(|pair| pair[0].min_years < pair[1].min_years)
        {
            return Err(invalid("vacation.tiers must ascend by min_years".to_string()));
        }
        if self.quinquenio.bracket_years == 0 {
            return Err(invalid("quinquenio.bracket_years must be positive".to_string()));
        }
        if !self
            .quinquenio
            .schedule
            .windows(2)
            .all(|pair| pair[0].years < pair[1].years)
        {
            return Err(invalid("quinquenio.schedule must ascend by years".to_string()));
        }
        Ok(())
    }
}

/// The complete benefit rule table.
///
/// Immutable once built; concurrent calculations share it by reference.
#[derive(Debug, Clone)]
pub struct RuleTable {
    /// Rule table metadata.
    metadata: RuleTableMetadata,
    /// Rules per termination reason.
    reasons: HashMap<TerminationReason, ReasonRule>,
    /// Parameter schedules by effective date (sorted oldest first).
    schedules: Vec<RuleSchedule>,
}

impl RuleTable {
    /// Creates a rule table from its parts, validating the schedules.
    pub fn new(
        metadata: RuleTableMetadata,
        reasons: HashMap<TerminationReason, ReasonRule>,
        schedules: Vec<RuleSchedule>,
    ) -> EngineResult<Self> {
        if schedules.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "at least one rule schedule is required".to_string(),
            });
        }
        for schedule in &schedules {
            schedule.validate()?;
        }
        for (reason, rule) in &reasons {
            if let Some(kind) = rule.benefits.iter().find(|kind| !kind.is_statutory()) {
                return Err(EngineError::InvalidConfig {
                    message: format!("reason {} grants non-statutory benefit {:?}", reason, kind),
                });
            }
        }

        let mut sorted_schedules = schedules;
        sorted_schedules.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Ok(Self {
            metadata,
            reasons,
            schedules: sorted_schedules,
        })
    }

    /// Returns the rule table metadata.
    pub fn metadata(&self) -> &RuleTableMetadata {
        &self.metadata
    }

    /// Returns all parameter schedules, oldest first.
    pub fn schedules(&self) -> &[RuleSchedule] {
        &self.schedules
    }

    /// Returns the rule for a termination reason.
    pub fn reason(&self, reason: TerminationReason) -> EngineResult<&ReasonRule> {
        self.reasons
            .get(&reason)
            .ok_or(EngineError::ReasonNotConfigured { reason })
    }

    /// Returns the most recent schedule effective on or before `date`.
    pub fn schedule_for(&self, date: NaiveDate) -> EngineResult<&RuleSchedule> {
        self.schedules
            .iter()
            .rfind(|schedule| schedule.effective_date <= date)
            .ok_or(EngineError::RuleScheduleNotFound { date })
    }

    /// Returns the version string recorded on lines computed with `schedule`.
    pub fn rule_version(&self, schedule: &RuleSchedule) -> String {
        format!("{}@{}", self.metadata.code, schedule.version)
    }
}
