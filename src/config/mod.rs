//! Benefit rule table loading and management.
//!
//! This module loads the declarative rule table that maps termination reasons
//! to the benefits they grant, together with effective-dated benefit
//! parameters (vacation tiers, quinquenio percentages, proration policy).
//!
//! # Example
//!
//! ```no_run
//! use finiquito_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/bo_general_labor_law").unwrap();
//! println!("Loaded rule table: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalculationPolicy, IndemnityRules, NoticePayRules, ProrationPolicy, QuinquenioBracket,
    QuinquenioRules, ReasonRule, ReasonsConfig, RuleSchedule, RuleTable, RuleTableMetadata,
    VacationRules, VacationTaxRules, VacationTier, YearEndBonusRules,
};
