//! Finiquito Settlement Engine for Bolivian General Labor Law
//!
//! This crate computes the final settlement owed to an employee when an
//! employment relationship ends: seniority, the three-month earnings base and
//! a line per statutory benefit, driven by a versioned rule table and exposed
//! over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
