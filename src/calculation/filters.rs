//! Filter selections over employees and their requests.
//!
//! The selected warehouse, department and location are an explicit value the
//! caller owns and passes in; nothing here holds selection state.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::{Employee, GroupAttribute, GroupBucket, VacationRequest};

/// The current filter selections. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Selected warehouse bucket.
    #[serde(default)]
    pub warehouse: Option<GroupBucket>,
    /// Selected department bucket.
    #[serde(default)]
    pub department: Option<GroupBucket>,
    /// Selected location bucket.
    #[serde(default)]
    pub location: Option<GroupBucket>,
}

impl FilterState {
    /// Returns true when no selection is active.
    pub fn is_unfiltered(&self) -> bool {
        self.warehouse.is_none() && self.department.is_none() && self.location.is_none()
    }

    /// Checks whether an employee passes every active selection.
    ///
    /// An unknown employee (`None`) sits in the ungrouped bucket of every attribute.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::calculation::FilterState;
    /// use vacation_engine::models::GroupBucket;
    ///
    /// let filter = FilterState {
    ///     location: Some(GroupBucket::Ungrouped),
    ///     ..FilterState::default()
    /// };
    /// assert!(filter.matches(None));
    /// ```
    pub fn matches(&self, employee: Option<&Employee>) -> bool {
        let selections = [
            (GroupAttribute::Warehouse, &self.warehouse),
            (GroupAttribute::Department, &self.department),
            (GroupAttribute::Location, &self.location),
        ];

        selections.into_iter().all(|(attribute, selected)| match selected {
            None => true,
            Some(bucket) => {
                let actual = employee
                    .map(|e| e.bucket(attribute))
                    .unwrap_or(GroupBucket::Ungrouped);
                &actual == bucket
            }
        })
    }
}

/// Keeps the requests whose employee passes the filter, preserving order.
pub fn filter_requests<'a>(
    requests: &'a [VacationRequest],
    employees: &[Employee],
    filter: &FilterState,
) -> Vec<&'a VacationRequest> {
    if filter.is_unfiltered() {
        return requests.iter().collect();
    }

    let by_id: HashMap<&str, &Employee> = employees.iter().map(|e| (e.id.as_str(), e)).collect();
    requests
        .iter()
        .filter(|request| filter.matches(by_id.get(request.employee_id.as_str()).copied()))
        .collect()
}

/// Returns the distinct buckets of an attribute, sorted, with `Ungrouped` last.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::group_buckets;
/// use vacation_engine::models::{Employee, GroupAttribute, GroupBucket};
///
/// let employee = |id: &str, warehouse: Option<&str>| Employee {
///     id: id.to_string(),
///     name: id.to_string(),
///     hire_date: None,
///     warehouse: warehouse.map(str::to_string),
///     department: None,
///     location: None,
///     role: None,
/// };
/// let employees = vec![employee("1", Some("Sur")), employee("2", None), employee("3", Some("Norte"))];
///
/// assert_eq!(
///     group_buckets(&employees, GroupAttribute::Warehouse),
///     vec![
///         GroupBucket::Named("Norte".to_string()),
///         GroupBucket::Named("Sur".to_string()),
///         GroupBucket::Ungrouped,
///     ]
/// );
/// ```
pub fn group_buckets(employees: &[Employee], attribute: GroupAttribute) -> Vec<GroupBucket> {
    employees
        .iter()
        .map(|employee| employee.bucket(attribute))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
