//! Core data models for the Finiquito Settlement Engine.
//!
//! This module contains the inputs the engine consumes (employee, payroll and
//! termination case) and the values it produces.

mod employee;
mod payroll;
mod settlement;
mod termination;

pub use employee::EmployeeRecord;
pub use payroll::{PayrollPeriod, PayrollSnapshot};
pub use settlement::{
    BenefitKind, BenefitLine, Diagnostic, EarningsSummary, SalaryBase, SeniorityResult,
    SettlementResult, Severity,
};
pub use termination::{ManualAdjustment, TerminationCase, TerminationReason};
