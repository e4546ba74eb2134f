//! Request types for the Finiquito Settlement Engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{EmployeeRecord, PayrollSnapshot, TerminationCase};

/// Request body for the `/calculate` endpoint.
///
/// Contains everything needed to settle one employee: the employee record,
/// the last three monthly payroll snapshots and the termination case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// The departing employee.
    pub employee: EmployeeRecord,
    /// The last three monthly payroll snapshots, oldest first.
    pub payroll: Vec<PayrollSnapshot>,
    /// The termination case.
    pub case: TerminationCase,
}
