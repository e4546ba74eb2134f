//! Employee record model.
//!
//! This module defines the [`EmployeeRecord`] struct: the static identity and
//! hire data of a departing employee, as supplied by the personnel master
//! database (RDP).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents the employee a settlement is calculated for.
///
/// The engine only ever reads this record; the calling workflow owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique person identifier (national identity document number).
    pub person_id: String,
    /// The employee's full name.
    pub full_name: String,
    /// The company the employee is affiliated with.
    pub employer: String,
    /// The date the employee started employment.
    pub hire_date: NaiveDate,
    /// The employee's date of birth.
    pub birth_date: NaiveDate,
    /// Business unit, carried through for document generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_unit: Option<String>,
    /// Occupation or job title, carried through for document generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
}

impl EmployeeRecord {
    /// Returns the identifier that is unique across employers.
    ///
    /// The same person may appear under several companies of a group, so the
    /// person id alone is not enough to address a record.
    ///
    /// # Examples
    ///
    /// ```
    /// use finiquito_engine::models::EmployeeRecord;
    /// use chrono::NaiveDate;
    ///
    /// let employee = EmployeeRecord {
    ///     person_id: "4567890".to_string(),
    ///     full_name: "Ana Quispe".to_string(),
    ///     employer: "ACME".to_string(),
    ///     hire_date: NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
    ///     birth_date: NaiveDate::from_ymd_opt(1990, 6, 1).unwrap(),
    ///     business_unit: None,
    ///     occupation: None,
    /// };
    /// assert_eq!(employee.full_identifier(), "4567890_ACME");
    /// ```
    pub fn full_identifier(&self) -> String {
        format!("{}_{}", self.person_id, self.employer)
    }

    /// Checks the record for internally inconsistent dates.
    ///
    /// Returns `InvalidEmployee` if the employee was born after being hired.
    pub fn validate(&self) -> EngineResult<()> {
        if self.birth_date >= self.hire_date {
            return Err(EngineError::InvalidEmployee {
                field: "birth_date".to_string(),
                message: format!(
                    "birth date {} is not before hire date {}",
                    self.birth_date, self.hire_date
                ),
            });
        }
        Ok(())
    }
}
