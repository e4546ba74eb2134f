//! Shared builders for calculator unit tests.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::{BenefitContext, compute_seniority};
use crate::config::{
    CalculationPolicy, IndemnityRules, NoticePayRules, ProrationPolicy, QuinquenioBracket,
    QuinquenioRules, ReasonRule, RuleSchedule, VacationRules, VacationTaxRules, VacationTier,
    YearEndBonusRules,
};
use crate::models::{
    BenefitKind, EarningsSummary, PayrollPeriod, SalaryBase, SeniorityResult, TerminationCase,
    TerminationReason,
};

pub(crate) fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn schedule() -> RuleSchedule {
    RuleSchedule {
        version: "2024-01-01".to_string(),
        effective_date: date(2024, 1, 1),
        policy: CalculationPolicy {
            proration: ProrationPolicy::RoundHalfUp,
            earnings_tolerance: dec("0.01"),
        },
        year_end_bonus: YearEndBonusRules {
            base: SalaryBase::Average,
        },
        vacation: VacationRules {
            base: SalaryBase::Average,
            days_per_month: 30,
            tiers: vec![
                VacationTier {
                    min_years: 0,
                    days: 15,
                },
                VacationTier {
                    min_years: 5,
                    days: 20,
                },
                VacationTier {
                    min_years: 10,
                    days: 30,
                },
            ],
        },
        indemnity: IndemnityRules {
            base: SalaryBase::Average,
            min_service_days: 90,
        },
        notice_pay: NoticePayRules {
            base: SalaryBase::Average,
            months: dec("1"),
        },
        quinquenio: QuinquenioRules {
            base: SalaryBase::LatestBasicSalary,
            bracket_years: 5,
            schedule: [(5, "5"), (10, "11"), (15, "18"), (20, "26"), (25, "34")]
                .into_iter()
                .map(|(years, percent)| QuinquenioBracket {
                    years,
                    percent: dec(percent),
                })
                .collect(),
        },
        vacation_tax: VacationTaxRules { rate: dec("0.13") },
    }
}

/// Monthly totals 5000, 5000, 5500; latest basic salary 5200.
pub(crate) fn scenario_earnings() -> EarningsSummary {
    EarningsSummary {
        periods: vec![
            PayrollPeriod::new(2024, 7).unwrap(),
            PayrollPeriod::new(2024, 8).unwrap(),
            PayrollPeriod::new(2024, 9).unwrap(),
        ],
        monthly_totals: vec![dec("5000"), dec("5000"), dec("5500")],
        average: dec("15500") / dec("3"),
        latest_basic_salary: dec("5200"),
    }
}

/// Owns everything a [`BenefitContext`] borrows.
pub(crate) struct Fixture {
    pub seniority: SeniorityResult,
    pub indemnity_service: SeniorityResult,
    pub earnings: EarningsSummary,
    pub case: TerminationCase,
    pub reason: ReasonRule,
    pub schedule: RuleSchedule,
    pub rule_version: String,
}

impl Fixture {
    /// Hire 2021-03-15, pay-through 2024-09-15, scenario earnings.
    pub fn new(reason: TerminationReason, benefits: &[BenefitKind]) -> Self {
        let hire = date(2021, 3, 15);
        let pay_through = date(2024, 9, 15);
        let seniority = compute_seniority(hire, pay_through).unwrap();
        Self {
            indemnity_service: seniority.clone(),
            seniority,
            earnings: scenario_earnings(),
            case: TerminationCase {
                pay_through_date: pay_through,
                request_date: date(2024, 9, 20),
                reason,
                vacation_days_already_taken: 0,
                manual_adjustments: vec![],
                year_end_bonus_already_paid: false,
                withhold_vacation_tax: false,
                indemnity_start_date: None,
            },
            reason: ReasonRule {
                description: reason.to_string(),
                benefits: benefits.to_vec(),
                one_day_less: false,
            },
            schedule: schedule(),
            rule_version: "BO-LGT@2024-01-01".to_string(),
        }
    }

    /// Replaces the service period.
    pub fn with_service(mut self, hire: NaiveDate, pay_through: NaiveDate) -> Self {
        self.seniority = compute_seniority(hire, pay_through).unwrap();
        self.indemnity_service = self.seniority.clone();
        self.case.pay_through_date = pay_through;
        self
    }

    pub fn ctx(&self) -> BenefitContext<'_> {
        BenefitContext {
            seniority: &self.seniority,
            indemnity_service: &self.indemnity_service,
            earnings: &self.earnings,
            case: &self.case,
            reason: &self.reason,
            schedule: &self.schedule,
            rule_version: &self.rule_version,
        }
    }
}
