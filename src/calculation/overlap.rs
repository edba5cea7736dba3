//! Overlap (empalme) detection between vacation requests.
//!
//! A request is flagged when its date range shares at least one calendar day
//! with another request's range. Requests without a group label never flag
//! and are never flagged. Under the cross-group-only policy, pairs inside the
//! same group are ignored.
//!
//! Results are recomputed from scratch for every input; nothing is cached.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Employee, GroupAttribute, RequestStatus, VacationRequest};

use super::dates::{ordered_range, ranges_intersect};

/// A request reduced to what overlap detection needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapCandidate {
    /// The request ID.
    pub id: String,
    /// Group label such as the warehouse; `None` excludes the request.
    #[serde(default)]
    pub group_label: Option<String>,
    /// First day (inclusive).
    pub start_date: NaiveDate,
    /// Last day (inclusive).
    pub end_date: NaiveDate,
}

impl OverlapCandidate {
    /// Returns the trimmed group label, or `None` when absent or blank.
    pub fn group(&self) -> Option<&str> {
        self.group_label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }

    fn range(&self) -> (NaiveDate, NaiveDate) {
        ordered_range(self.start_date, self.end_date)
    }
}

/// The set of request IDs that take part in at least one qualifying overlap.
///
/// Iteration order is sorted by ID, so two indexes built from the same input
/// compare and serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverlapIndex {
    ids: BTreeSet<String>,
}

impl OverlapIndex {
    /// Checks whether a request was flagged.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of flagged requests.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no request was flagged.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over the flagged IDs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Consumes the index, returning the sorted IDs.
    pub fn into_ids(self) -> Vec<String> {
        self.ids.into_iter().collect()
    }

    fn flag_pair(&mut self, a: &OverlapCandidate, b: &OverlapCandidate) {
        self.ids.insert(a.id.clone());
        self.ids.insert(b.id.clone());
    }
}

/// Checks the group policy for a pair; both must carry a label.
fn groups_qualify(a: &OverlapCandidate, b: &OverlapCandidate, cross_group_only: bool) -> bool {
    match (a.group(), b.group()) {
        (Some(group_a), Some(group_b)) => !(cross_group_only && group_a == group_b),
        _ => false,
    }
}

/// Finds every request that overlaps at least one other request.
///
/// Compares every unordered pair. A pair qualifies when both requests have
/// a group label, the groups differ if `cross_group_only` is set, and the
/// ranges share a day (touching boundaries count). Backwards ranges are
/// reordered before comparison.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{compute_overlaps, OverlapCandidate};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2026, 1, day).unwrap();
/// let candidate = |id: &str, group: &str, start, end| OverlapCandidate {
///     id: id.to_string(),
///     group_label: Some(group.to_string()),
///     start_date: d(start),
///     end_date: d(end),
/// };
///
/// let requests = vec![candidate("a", "Norte", 1, 10), candidate("b", "Norte", 10, 20)];
///
/// let all = compute_overlaps(&requests, false);
/// assert!(all.contains("a") && all.contains("b"));
///
/// let cross = compute_overlaps(&requests, true);
/// assert!(cross.is_empty());
/// ```
pub fn compute_overlaps(candidates: &[OverlapCandidate], cross_group_only: bool) -> OverlapIndex {
    let mut index = OverlapIndex::default();

    for (i, a) in candidates.iter().enumerate() {
        for b in &candidates[i + 1..] {
            if groups_qualify(a, b, cross_group_only) && ranges_intersect(a.range(), b.range()) {
                index.flag_pair(a, b);
            }
        }
    }

    debug!(
        candidates = candidates.len(),
        flagged = index.len(),
        cross_group_only,
        "Computed overlaps"
    );
    index
}

/// Sweep-line variant of [`compute_overlaps`] returning the same set.
///
/// Sorts the grouped requests by start date and keeps the ranges that are
/// still open at the current start; each new request is only compared with
/// those. Worth using once inputs reach the thousands.
pub fn compute_overlaps_sweep(
    candidates: &[OverlapCandidate],
    cross_group_only: bool,
) -> OverlapIndex {
    let mut ordered: Vec<&OverlapCandidate> =
        candidates.iter().filter(|c| c.group().is_some()).collect();
    ordered.sort_by_key(|c| c.range().0);

    let mut index = OverlapIndex::default();
    let mut active: Vec<&OverlapCandidate> = Vec::new();

    for current in ordered {
        let (start, _) = current.range();
        active.retain(|open| open.range().1 >= start);

        for open in &active {
            if groups_qualify(open, current, cross_group_only) {
                index.flag_pair(open, current);
            }
        }
        active.push(current);
    }

    index
}

/// Builds overlap candidates by labelling each request with its employee's attribute.
///
/// Rejected requests are left out. Requests whose employee is unknown, or
/// whose employee lacks the attribute, get no group label.
pub fn overlap_candidates<'a, I>(
    requests: I,
    employees: &[Employee],
    attribute: GroupAttribute,
) -> Vec<OverlapCandidate>
where
    I: IntoIterator<Item = &'a VacationRequest>,
{
    let by_id: HashMap<&str, &Employee> = employees.iter().map(|e| (e.id.as_str(), e)).collect();

    requests
        .into_iter()
        .filter(|request| request.status != RequestStatus::Rejected)
        .map(|request| OverlapCandidate {
            id: request.id.clone(),
            group_label: by_id
                .get(request.employee_id.as_str())
                .and_then(|employee| employee.attribute(attribute))
                .map(str::to_string),
            start_date: request.start_date,
            end_date: request.end_date,
        })
        .collect()
}
