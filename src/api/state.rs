//! Application state for the Finiquito Settlement Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, RuleTable};

/// Shared application state.
///
/// Holds the loaded rule table. It is never modified after startup, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rule table.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the rule table used for every calculation.
    pub fn rule_table(&self) -> &RuleTable {
        self.config.table()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_rule_table() {
        let state = AppState::new(ConfigLoader::load("./config/bo_general_labor_law").unwrap());
        let clone = state.clone();
        assert!(std::ptr::eq(state.rule_table(), clone.rule_table()));
    }
}
