//! Configuration loading and management for the vacation engine.
//!
//! This module loads the vacation policy (overlap defaults, grouping
//! attribute, which statuses consume balance), the daily concurrency
//! thresholds and the calendar annotations from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use vacation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/vacation_policy").unwrap();
//! println!("Cross-group only by default: {}", config.policy().cross_group_only);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarConfig, ConcurrencyConfig, EngineConfig, MarkedPeriod, PolicyConfig};
