//! Daily vacation concurrency.
//!
//! For each day in a window, lists the requests that cover it and grades how
//! crowded the day is, so managers can spot days with many people out. Days
//! also carry the holiday and marked-period annotations from the calendar.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{CalendarConfig, ConcurrencyConfig};
use crate::models::{RequestStatus, VacationRequest};

/// How crowded a day is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcurrencyLevel {
    /// Fewer requests than the mid threshold.
    Low,
    /// At least the mid threshold, below the high threshold.
    Mid,
    /// At least the high threshold.
    High,
}

impl ConcurrencyLevel {
    /// Grades a head count against the configured thresholds.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::calculation::ConcurrencyLevel;
    /// use vacation_engine::config::ConcurrencyConfig;
    ///
    /// let thresholds = ConcurrencyConfig::default();
    /// assert_eq!(ConcurrencyLevel::for_count(2, &thresholds), ConcurrencyLevel::Low);
    /// assert_eq!(ConcurrencyLevel::for_count(3, &thresholds), ConcurrencyLevel::Mid);
    /// assert_eq!(ConcurrencyLevel::for_count(5, &thresholds), ConcurrencyLevel::High);
    /// ```
    pub fn for_count(count: usize, thresholds: &ConcurrencyConfig) -> Self {
        if count >= thresholds.high_threshold {
            ConcurrencyLevel::High
        } else if count >= thresholds.mid_threshold {
            ConcurrencyLevel::Mid
        } else {
            ConcurrencyLevel::Low
        }
    }
}

/// The requests covering one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLoad {
    /// The calendar day.
    pub date: NaiveDate,
    /// IDs of the requests covering the day, in input order.
    pub request_ids: Vec<String>,
    /// Grade of `request_ids.len()`.
    pub level: ConcurrencyLevel,
    /// The day is a configured holiday.
    #[serde(default)]
    pub holiday: bool,
    /// Name of the marked period the day falls in, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marked_period: Option<String>,
}

/// Computes per-day load for every day in `[first, last]` covered by a request.
///
/// Rejected requests are ignored. Days nobody is out are omitted. Returns an
/// empty list when `first` is after `last`.
pub fn daily_concurrency<'a, I>(
    requests: I,
    first: NaiveDate,
    last: NaiveDate,
    thresholds: &ConcurrencyConfig,
    calendar: &CalendarConfig,
) -> Vec<DayLoad>
where
    I: IntoIterator<Item = &'a VacationRequest>,
{
    if first > last {
        return Vec::new();
    }

    let mut by_day: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();

    for request in requests {
        if request.status == RequestStatus::Rejected {
            continue;
        }

        let (start, end) = request.normalized_range();
        let from = start.max(first);
        let to = end.min(last);
        if from > to {
            continue;
        }

        for day in from.iter_days().take_while(|day| *day <= to) {
            by_day.entry(day).or_default().push(request.id.clone());
        }
    }

    by_day
        .into_iter()
        .map(|(date, request_ids)| DayLoad {
            level: ConcurrencyLevel::for_count(request_ids.len(), thresholds),
            holiday: calendar.is_holiday(date),
            marked_period: calendar.marked_period(date).map(str::to_string),
            date,
            request_ids,
        })
        .collect()
}
