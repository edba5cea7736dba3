//! Request types for the vacation engine API.
//!
//! Dates the calculators treat fail-soft are accepted as raw strings so an
//! unparsable value yields a zero result instead of a rejected payload.
//! Employee and request rows arrive as raw backend JSON and go through
//! [`crate::normalize`]; rows that cannot be mapped are skipped.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::calculation::{FilterState, OverlapCandidate, parse_optional_date};
use crate::models::GroupAttribute;

/// Request body for `POST /entitlement`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntitlementRequest {
    /// The employee's hire date (`YYYY-MM-DD` or a timestamp).
    #[serde(default)]
    pub hire_date: Option<String>,
    /// The date to evaluate the balance at.
    #[serde(default)]
    pub reference_date: Option<String>,
    /// Days already used. When absent, derived from `requests`.
    #[serde(default)]
    pub used_days: Option<u32>,
    /// The employee's existing requests, as backend rows.
    #[serde(default)]
    pub requests: Vec<Value>,
}

/// One pre-labelled row of `POST /overlaps`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRow {
    /// The request ID.
    pub id: String,
    /// Group label such as the warehouse.
    #[serde(default)]
    pub group_label: Option<String>,
    /// First day, as sent.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last day, as sent.
    #[serde(default)]
    pub end_date: Option<String>,
}

impl CandidateRow {
    /// Parses the row's dates. Returns `None` when either is missing or unparsable.
    pub fn to_candidate(&self) -> Option<OverlapCandidate> {
        Some(OverlapCandidate {
            id: self.id.clone(),
            group_label: self.group_label.clone(),
            start_date: parse_optional_date(self.start_date.as_deref())?,
            end_date: parse_optional_date(self.end_date.as_deref())?,
        })
    }
}

/// Request body for `POST /overlaps`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapRequest {
    /// The requests to compare.
    pub requests: Vec<CandidateRow>,
    /// Overrides the configured cross-group-only policy.
    #[serde(default)]
    pub cross_group_only: Option<bool>,
}

/// Request body for `POST /calendar/overlaps`.
///
/// Requests are labelled with their employee's attribute named by the
/// policy's `group_by`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarOverlapRequest {
    /// Request rows.
    pub requests: Vec<Value>,
    /// Employee rows.
    #[serde(default)]
    pub employees: Vec<Value>,
    /// Overrides the configured cross-group-only policy.
    #[serde(default)]
    pub cross_group_only: Option<bool>,
}

/// Request body for `POST /concurrency`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcurrencyRequest {
    /// Request rows to place on the calendar.
    pub requests: Vec<Value>,
    /// Employee rows, used to apply `filter`.
    #[serde(default)]
    pub employees: Vec<Value>,
    /// Current filter selections.
    #[serde(default)]
    pub filter: FilterState,
    /// First day of the window (inclusive).
    #[serde(default)]
    pub first: Option<String>,
    /// Last day of the window (inclusive).
    #[serde(default)]
    pub last: Option<String>,
    /// Extra holidays for this call, added to the configured ones.
    #[serde(default)]
    pub holidays: Vec<String>,
}

/// Request body for `POST /groups`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupsRequest {
    /// Employee rows.
    pub employees: Vec<Value>,
    /// Attribute to group by. Defaults to the policy's `group_by`.
    #[serde(default)]
    pub attribute: Option<GroupAttribute>,
}

/// Request body for `POST /requests/check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestCheckRequest {
    /// The employee asking for vacation, as a backend row.
    pub employee: Value,
    /// First day requested.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last day requested.
    #[serde(default)]
    pub end_date: Option<String>,
    /// The date the request is made.
    #[serde(default)]
    pub reference_date: Option<String>,
    /// Days already used. When absent, derived from `requests`.
    #[serde(default)]
    pub used_days: Option<u32>,
    /// The employee's existing requests, as backend rows.
    #[serde(default)]
    pub requests: Vec<Value>,
}
