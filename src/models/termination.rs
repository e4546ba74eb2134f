//! Termination case models.
//!
//! This module defines the [`TerminationCase`] that parameterizes a settlement:
//! why and when the employment ends, plus operator-supplied adjustments.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The reason an employment relationship ends.
///
/// The set is closed in code; which benefits each reason grants lives in the
/// rule table, so amending eligibility never requires touching this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Voluntary resignation (renuncia).
    Resignation,
    /// Dismissal with legal cause (despido justificado).
    DismissalWithCause,
    /// Dismissal without legal cause (despido injustificado).
    DismissalWithoutCause,
    /// Termination by mutual agreement.
    MutualAgreement,
    /// Retirement.
    Retirement,
    /// Rejection after the probationary medical or skills exam.
    PostExamRejection,
    /// Resignation forced by the employer's conduct (retiro indirecto).
    IndirectDismissal,
    /// End of a fixed-term contract.
    ContractCompletion,
}

impl TerminationReason {
    /// Every reason, in declaration order.
    pub const ALL: [TerminationReason; 8] = [
        TerminationReason::Resignation,
        TerminationReason::DismissalWithCause,
        TerminationReason::DismissalWithoutCause,
        TerminationReason::MutualAgreement,
        TerminationReason::Retirement,
        TerminationReason::PostExamRejection,
        TerminationReason::IndirectDismissal,
        TerminationReason::ContractCompletion,
    ];

    /// The wire code of the reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationReason::Resignation => "resignation",
            TerminationReason::DismissalWithCause => "dismissal_with_cause",
            TerminationReason::DismissalWithoutCause => "dismissal_without_cause",
            TerminationReason::MutualAgreement => "mutual_agreement",
            TerminationReason::Retirement => "retirement",
            TerminationReason::PostExamRejection => "post_exam_rejection",
            TerminationReason::IndirectDismissal => "indirect_dismissal",
            TerminationReason::ContractCompletion => "contract_completion",
        }
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ad-hoc amount entered by an operator.
///
/// Positive amounts are extra bonuses, negative amounts are deductions such
/// as salary advances. Adjustments are always additive line items; they
/// never override a computed benefit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualAdjustment {
    /// Label printed on the settlement.
    pub label: String,
    /// Signed amount.
    pub amount: Decimal,
}

/// The parameters of a single termination.
///
/// # Example
///
/// ```
/// use finiquito_engine::models::{TerminationCase, TerminationReason};
///
/// let json = r#"{
///     "pay_through_date": "2024-09-15",
///     "request_date": "2024-09-20",
///     "reason": "resignation"
/// }"#;
/// let case: TerminationCase = serde_json::from_str(json).unwrap();
/// assert_eq!(case.reason, TerminationReason::Resignation);
/// assert_eq!(case.vacation_days_already_taken, 0);
/// assert!(case.manual_adjustments.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationCase {
    /// Last day the employee is paid for.
    pub pay_through_date: NaiveDate,
    /// Date the settlement was requested.
    pub request_date: NaiveDate,
    /// Why the employment ends.
    pub reason: TerminationReason,
    /// Vacation days of the current entitlement already enjoyed.
    #[serde(default)]
    pub vacation_days_already_taken: u32,
    /// Operator-entered bonuses and deductions, in entry order.
    #[serde(default)]
    pub manual_adjustments: Vec<ManualAdjustment>,
    /// The year-end bonus for the termination year was already paid out.
    #[serde(default)]
    pub year_end_bonus_already_paid: bool,
    /// Withhold income tax (RC-IVA) on the vacation payout.
    #[serde(default)]
    pub withhold_vacation_tax: bool,
    /// Start of the service period counted for indemnity, when earlier
    /// service was already settled (for example by a quinquenio payout).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indemnity_start_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_reason_serialization_matches_as_str() {
        for reason in TerminationReason::ALL {
            let json = serde_json::to_string(&reason).unwrap();
            assert_eq!(json, format!("\"{}\"", reason.as_str()));
        }
    }

    #[test]
    fn test_reason_deserialization() {
        let reason: TerminationReason =
            serde_json::from_str("\"dismissal_without_cause\"").unwrap();
        assert_eq!(reason, TerminationReason::DismissalWithoutCause);

        assert!(serde_json::from_str::<TerminationReason>("\"fired\"").is_err());
    }

    #[test]
    fn test_deserialize_full_case() {
        let json = r#"{
            "pay_through_date": "2024-09-15",
            "request_date": "2024-09-20",
            "reason": "dismissal_without_cause",
            "vacation_days_already_taken": 5,
            "manual_adjustments": [
                {"label": "Salary advance", "amount": "-500.00"},
                {"label": "Extraordinary bonus", "amount": "250.00"}
            ],
            "year_end_bonus_already_paid": true,
            "withhold_vacation_tax": true,
            "indemnity_start_date": "2022-01-01"
        }"#;

        let case: TerminationCase = serde_json::from_str(json).unwrap();
        assert_eq!(case.vacation_days_already_taken, 5);
        assert_eq!(case.manual_adjustments.len(), 2);
        assert_eq!(
            case.manual_adjustments[0].amount,
            Decimal::from_str("-500.00").unwrap()
        );
        assert!(case.year_end_bonus_already_paid);
        assert!(case.withhold_vacation_tax);
        assert_eq!(
            case.indemnity_start_date,
            Some(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap())
        );
    }

    #[test]
    fn test_negative_vacation_days_rejected() {
        let json = r#"{
            "pay_through_date": "2024-09-15",
            "request_date": "2024-09-20",
            "reason": "resignation",
            "vacation_days_already_taken": -2
        }"#;
        assert!(serde_json::from_str::<TerminationCase>(json).is_err());
    }
}
