//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the vacation
//! policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{VacationError, VacationResult};

use super::types::{CalendarConfig, ConcurrencyConfig, EngineConfig, PolicyConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/vacation_policy/
/// ├── policy.yaml       # Overlap policy, grouping attribute, consuming statuses
/// ├── concurrency.yaml  # Daily concurrency thresholds
/// └── calendar.yaml     # Holidays and highlighted periods
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/vacation_policy").unwrap();
/// println!("Loaded policy: {}", loader.policy().name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if a file is missing, contains invalid YAML, the
    /// concurrency thresholds are inconsistent, or a marked period ends
    /// before it starts.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vacation_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/vacation_policy")?;
    /// # Ok::<(), vacation_engine::error::VacationError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> VacationResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<PolicyConfig>(&path.join("policy.yaml"))?;
        let concurrency = Self::load_yaml::<ConcurrencyConfig>(&path.join("concurrency.yaml"))?;
        let calendar = Self::load_yaml::<CalendarConfig>(&path.join("calendar.yaml"))?;
        Self::validate_concurrency(&concurrency)?;
        Self::validate_calendar(&calendar)?;

        info!(
            policy = %policy.name,
            version = %policy.version,
            cross_group_only = policy.cross_group_only,
            group_by = %policy.group_by,
            holidays = calendar.holidays.len(),
            marked_periods = calendar.marked_periods.len(),
            "Loaded vacation policy"
        );

        Ok(Self {
            config: EngineConfig::new(policy, concurrency).with_calendar(calendar),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> VacationResult<Self> {
        Self::validate_concurrency(config.concurrency())?;
        Self::validate_calendar(config.calendar())?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> VacationResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| VacationError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| VacationError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_concurrency(concurrency: &ConcurrencyConfig) -> VacationResult<()> {
        if concurrency.mid_threshold == 0 {
            return Err(VacationError::InvalidConfig {
                message: "mid_threshold must be at least 1".to_string(),
            });
        }
        if concurrency.mid_threshold > concurrency.high_threshold {
            return Err(VacationError::InvalidConfig {
                message: format!(
                    "mid_threshold ({}) exceeds high_threshold ({})",
                    concurrency.mid_threshold, concurrency.high_threshold
                ),
            });
        }
        Ok(())
    }

    fn validate_calendar(calendar: &CalendarConfig) -> VacationResult<()> {
        match calendar
            .marked_periods
            .iter()
            .find(|period| period.end < period.start)
        {
            Some(period) => Err(VacationError::InvalidConfig {
                message: format!(
                    "marked period '{}' ends ({}) before it starts ({})",
                    period.name, period.end, period.start
                ),
            }),
            None => Ok(()),
        }
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the vacation policy.
    pub fn policy(&self) -> &PolicyConfig {
        self.config.policy()
    }

    /// Returns the concurrency thresholds.
    pub fn concurrency(&self) -> &ConcurrencyConfig {
        self.config.concurrency()
    }

    /// Returns the calendar annotations.
    pub fn calendar(&self) -> &CalendarConfig {
        self.config.calendar()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarkedPeriod;
    use crate::models::{GroupAttribute, RequestStatus};
    use chrono::NaiveDate;

    fn config_path() -> &'static str {
        "./config/vacation_policy"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert!(loader.policy().cross_group_only);
        assert_eq!(loader.policy().group_by, GroupAttribute::Warehouse);
        assert_eq!(
            loader.policy().consuming_statuses,
            vec![
                RequestStatus::Proposed,
                RequestStatus::Pending,
                RequestStatus::Approved
            ]
        );
        assert_eq!(loader.concurrency().mid_threshold, 3);
        assert_eq!(loader.concurrency().high_threshold, 5);

        let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let buen_fin = NaiveDate::from_ymd_opt(2026, 11, 14).unwrap();
        assert!(loader.calendar().is_holiday(new_year));
        assert_eq!(loader.calendar().marked_period(buen_fin), Some("Buen Fin"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        match result {
            Err(VacationError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let config = EngineConfig::new(
            PolicyConfig::default(),
            ConcurrencyConfig {
                mid_threshold: 6,
                high_threshold: 5,
            },
        );
        assert!(matches!(
            ConfigLoader::from_config(config),
            Err(VacationError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_zero_mid_threshold_rejected() {
        let config = EngineConfig::new(
            PolicyConfig::default(),
            ConcurrencyConfig {
                mid_threshold: 0,
                high_threshold: 5,
            },
        );
        assert!(ConfigLoader::from_config(config).is_err());
    }

    #[test]
    fn test_default_loader_matches_shipped_files() {
        let loaded = ConfigLoader::load(config_path()).unwrap();
        let default = ConfigLoader::default();
        assert_eq!(loaded.concurrency(), default.concurrency());
        assert_eq!(
            loaded.policy().cross_group_only,
            default.policy().cross_group_only
        );
    }

    #[test]
    fn test_backwards_marked_period_rejected() {
        let calendar = CalendarConfig {
            marked_periods: vec![MarkedPeriod {
                name: "Buen Fin".to_string(),
                start: NaiveDate::from_ymd_opt(2026, 11, 16).unwrap(),
                end: NaiveDate::from_ymd_opt(2026, 11, 13).unwrap(),
            }],
            ..CalendarConfig::default()
        };
        let config = EngineConfig::default().with_calendar(calendar);
        match ConfigLoader::from_config(config) {
            Err(VacationError::InvalidConfig { message }) => assert!(message.contains("Buen Fin")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }
}
