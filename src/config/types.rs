//! Configuration types for the vacation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{GroupAttribute, RequestStatus};

/// Vacation policy from policy.yaml.
///
/// The statutory allotment table is fixed by law and deliberately absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Human-readable name of the policy.
    pub name: String,
    /// Version or effective date of the policy.
    pub version: String,
    /// Default for the cross-group-only overlap policy.
    #[serde(default = "default_cross_group_only")]
    pub cross_group_only: bool,
    /// The employee attribute that labels requests for overlap detection.
    #[serde(default = "default_group_by")]
    pub group_by: GroupAttribute,
    /// Statuses whose requests count towards used days.
    #[serde(default = "default_consuming_statuses")]
    pub consuming_statuses: Vec<RequestStatus>,
}

fn default_cross_group_only() -> bool {
    true
}

fn default_group_by() -> GroupAttribute {
    GroupAttribute::Warehouse
}

fn default_consuming_statuses() -> Vec<RequestStatus> {
    vec![
        RequestStatus::Proposed,
        RequestStatus::Pending,
        RequestStatus::Approved,
    ]
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            name: "Vacaciones LFT".to_string(),
            version: "2023".to_string(),
            cross_group_only: default_cross_group_only(),
            group_by: default_group_by(),
            consuming_statuses: default_consuming_statuses(),
        }
    }
}

/// Thresholds for grading daily concurrency, from concurrency.yaml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcurrencyConfig {
    /// Requests on one day at which the day is graded mid.
    #[serde(default = "default_mid_threshold")]
    pub mid_threshold: usize,
    /// Requests on one day at which the day is graded high.
    #[serde(default = "default_high_threshold")]
    pub high_threshold: usize,
}

fn default_mid_threshold() -> usize {
    3
}

fn default_high_threshold() -> usize {
    5
}

impl Default for ConcurrencyConfig {
    fn default() -> Self {
        Self {
            mid_threshold: default_mid_threshold(),
            high_threshold: default_high_threshold(),
        }
    }
}

/// A named run of days highlighted on the calendar, such as Buen Fin.
///
/// The days stay regular working days; the period only marks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedPeriod {
    /// Label shown for the period.
    pub name: String,
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl MarkedPeriod {
    /// Checks whether the period includes a day.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Holidays and highlighted periods from calendar.yaml.
///
/// These only annotate calendar days. Business-day counting ignores them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Official rest days.
    #[serde(default)]
    pub holidays: BTreeSet<NaiveDate>,
    /// Highlighted working periods.
    #[serde(default)]
    pub marked_periods: Vec<MarkedPeriod>,
}

impl CalendarConfig {
    /// Checks whether a day is a configured holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Returns the name of the first marked period that includes the day.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::config::{CalendarConfig, MarkedPeriod};
    /// use chrono::NaiveDate;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2026, 11, day).unwrap();
    /// let calendar = CalendarConfig {
    ///     marked_periods: vec![MarkedPeriod {
    ///         name: "Buen Fin".to_string(),
    ///         start: d(13),
    ///         end: d(16),
    ///     }],
    ///     ..CalendarConfig::default()
    /// };
    /// assert_eq!(calendar.marked_period(d(16)), Some("Buen Fin"));
    /// assert_eq!(calendar.marked_period(d(17)), None);
    /// ```
    pub fn marked_period(&self, date: NaiveDate) -> Option<&str> {
        self.marked_periods
            .iter()
            .find(|period| period.contains(date))
            .map(|period| period.name.as_str())
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    policy: PolicyConfig,
    concurrency: ConcurrencyConfig,
    calendar: CalendarConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts, with an empty calendar.
    pub fn new(policy: PolicyConfig, concurrency: ConcurrencyConfig) -> Self {
        Self {
            policy,
            concurrency,
            calendar: CalendarConfig::default(),
        }
    }

    /// Replaces the calendar annotations.
    pub fn with_calendar(mut self, calendar: CalendarConfig) -> Self {
        self.calendar = calendar;
        self
    }

    /// Returns the vacation policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Returns the concurrency thresholds.
    pub fn concurrency(&self) -> &ConcurrencyConfig {
        &self.concurrency
    }

    /// Returns the calendar annotations.
    pub fn calendar(&self) -> &CalendarConfig {
        &self.calendar
    }
}
