//! Shared inputs and outputs of the benefit calculators.

use rust_decimal::Decimal;
use serde_json::json;

use crate::config::{ReasonRule, RuleSchedule};
use crate::models::{
    BenefitKind, BenefitLine, Diagnostic, EarningsSummary, SeniorityResult, TerminationCase,
};

/// Read-only values every benefit calculator draws from.
///
/// Built once per calculation after seniority and earnings are known; no
/// calculator can modify it.
#[derive(Debug, Clone, Copy)]
pub struct BenefitContext<'a> {
    /// Service from hire date to the pay-through date.
    pub seniority: &'a SeniorityResult,
    /// Service counted for the severance indemnity.
    pub indemnity_service: &'a SeniorityResult,
    /// The earnings base.
    pub earnings: &'a EarningsSummary,
    /// The termination case.
    pub case: &'a TerminationCase,
    /// What the termination reason grants.
    pub reason: &'a ReasonRule,
    /// Benefit parameters in force on the pay-through date.
    pub schedule: &'a RuleSchedule,
    /// Version string of `schedule`.
    pub rule_version: &'a str,
}

/// A computed line plus the findings raised while computing it.
#[derive(Debug, Clone)]
pub struct BenefitOutcome {
    /// The settlement line.
    pub line: BenefitLine,
    /// Non-fatal findings.
    pub diagnostics: Vec<Diagnostic>,
}

impl BenefitContext<'_> {
    /// Builds an eligible line.
    pub(crate) fn line(
        &self,
        kind: BenefitKind,
        label: &str,
        amount: Decimal,
        basis: String,
        inputs: serde_json::Value,
    ) -> BenefitLine {
        BenefitLine {
            kind,
            label: label.to_string(),
            amount,
            eligible: true,
            basis,
            inputs,
            rule_version: self.rule_version.to_string(),
        }
    }

    /// Builds the zeroed line of a benefit the termination reason does not grant.
    ///
    /// The line stays in the breakdown so readers can see why it is zero.
    pub(crate) fn not_granted(&self, kind: BenefitKind, label: &str) -> BenefitOutcome {
        let basis = format!(
            "{} is not granted for termination reason '{}'",
            label, self.case.reason
        );
        BenefitOutcome {
            line: BenefitLine {
                kind,
                label: label.to_string(),
                amount: Decimal::ZERO,
                eligible: false,
                basis: basis.clone(),
                inputs: json!({
                    "reason": self.case.reason,
                    "granted_benefits": self.reason.benefits,
                }),
                rule_version: self.rule_version.to_string(),
            },
            diagnostics: vec![Diagnostic::warning("benefit_not_granted", basis)],
        }
    }
}
