//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the benefit
//! rule table from YAML files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::TerminationReason;

use super::types::{ReasonRule, ReasonsConfig, RuleSchedule, RuleTable, RuleTableMetadata};

/// Loads and provides access to the benefit rule table.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/bo_general_labor_law/
/// ├── rule_table.yaml     # Rule table metadata
/// ├── reasons.yaml        # Benefits granted per termination reason
/// └── schedules/
///     └── 2024-01-01.yaml # Benefit parameters effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use finiquito_engine::config::ConfigLoader;
/// use finiquito_engine::models::TerminationReason;
///
/// let loader = ConfigLoader::load("./config/bo_general_labor_law")?;
/// let rule = loader.get_reason(TerminationReason::DismissalWithoutCause)?;
/// println!("{}: {:?}", rule.description, rule.benefits);
/// # Ok::<(), finiquito_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    table: RuleTable,
}

impl ConfigLoader {
    /// Loads the rule table from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or unknown codes (`ConfigParseError`)
    /// - The schedules are unusable (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<RuleTableMetadata>(&path.join("rule_table.yaml"))?;
        let reasons = Self::load_yaml::<ReasonsConfig>(&path.join("reasons.yaml"))?;
        let schedules = Self::load_schedules(&path.join("schedules"))?;

        debug!(
            code = %metadata.code,
            reasons = reasons.reasons.len(),
            schedules = schedules.len(),
            "Loaded rule table"
        );

        let table = RuleTable::new(metadata, reasons.reasons, schedules)?;
        Ok(Self { table })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all schedule files from the schedules directory.
    fn load_schedules(schedules_dir: &Path) -> EngineResult<Vec<RuleSchedule>> {
        let dir_str = schedules_dir.display().to_string();

        let entries = fs::read_dir(schedules_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut schedules = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                schedules.push(Self::load_yaml::<RuleSchedule>(&path)?);
            }
        }

        if schedules.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no schedule files found)", dir_str),
            });
        }

        Ok(schedules)
    }

    /// Returns the underlying rule table.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Returns the rule table metadata.
    pub fn metadata(&self) -> &RuleTableMetadata {
        self.table.metadata()
    }

    /// Gets the rule for a termination reason.
    pub fn get_reason(&self, reason: TerminationReason) -> EngineResult<&ReasonRule> {
        self.table.reason(reason)
    }

    /// Gets the schedule effective on the given date.
    pub fn get_schedule(&self, date: NaiveDate) -> EngineResult<&RuleSchedule> {
        self.table.schedule_for(date)
    }
}
