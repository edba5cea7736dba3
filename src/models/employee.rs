//! Employee model and grouping types.
//!
//! This module defines the Employee struct plus the attribute and bucket types
//! used to group employees (and their requests) by warehouse, department,
//! location or role.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee attribute that requests can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupAttribute {
    /// The warehouse (bodega) the employee is assigned to.
    Warehouse,
    /// The employee's department.
    Department,
    /// The employee's location.
    Location,
    /// The employee's role.
    Role,
}

impl GroupAttribute {
    /// Display label for employees without a value for this attribute.
    pub fn ungrouped_label(&self) -> &'static str {
        match self {
            GroupAttribute::Warehouse => "(Sin bodega)",
            GroupAttribute::Department => "(Sin depto)",
            GroupAttribute::Location => "(Sin localización)",
            GroupAttribute::Role => "(Sin puesto)",
        }
    }
}

impl std::fmt::Display for GroupAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupAttribute::Warehouse => write!(f, "warehouse"),
            GroupAttribute::Department => write!(f, "department"),
            GroupAttribute::Location => write!(f, "location"),
            GroupAttribute::Role => write!(f, "role"),
        }
    }
}

/// The bucket an employee falls into for one grouping attribute.
///
/// Employees with an absent or blank attribute land in [`GroupBucket::Ungrouped`]
/// so they are never silently dropped from filters. `Named` buckets sort before
/// `Ungrouped`.
///
/// # Example
///
/// ```
/// use vacation_engine::models::GroupBucket;
///
/// assert_eq!(GroupBucket::from_label(Some("Norte")), GroupBucket::Named("Norte".to_string()));
/// assert_eq!(GroupBucket::from_label(Some("   ")), GroupBucket::Ungrouped);
/// assert_eq!(GroupBucket::from_label(None), GroupBucket::Ungrouped);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBucket {
    /// A present, non-blank attribute value.
    Named(String),
    /// The attribute was absent or blank.
    Ungrouped,
}

impl GroupBucket {
    /// Builds a bucket from an optional attribute value.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some(value) if !value.is_empty() => GroupBucket::Named(value.to_string()),
            _ => GroupBucket::Ungrouped,
        }
    }

    /// Returns the label to show for this bucket of `attribute`.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::{GroupAttribute, GroupBucket};
    ///
    /// let norte = GroupBucket::Named("Norte".to_string());
    /// assert_eq!(norte.display_label(GroupAttribute::Warehouse), "Norte");
    /// assert_eq!(
    ///     GroupBucket::Ungrouped.display_label(GroupAttribute::Warehouse),
    ///     "(Sin bodega)"
    /// );
    /// ```
    pub fn display_label(&self, attribute: GroupAttribute) -> &str {
        match self {
            GroupBucket::Named(label) => label,
            GroupBucket::Ungrouped => attribute.ungrouped_label(),
        }
    }
}

/// Represents an employee who can request vacation.
///
/// Grouping attributes are optional; the backend leaves them null for
/// employees that were never assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The date the employee was hired. `None` when the backend had no usable value.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Warehouse assignment.
    #[serde(default)]
    pub warehouse: Option<String>,
    /// Department assignment.
    #[serde(default)]
    pub department: Option<String>,
    /// Location assignment.
    #[serde(default)]
    pub location: Option<String>,
    /// Role or job title.
    #[serde(default)]
    pub role: Option<String>,
}

impl Employee {
    /// Returns the trimmed, non-blank value of a grouping attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::models::{Employee, GroupAttribute};
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Ana Torres".to_string(),
    ///     hire_date: None,
    ///     warehouse: Some(" Norte ".to_string()),
    ///     department: Some("".to_string()),
    ///     location: None,
    ///     role: None,
    /// };
    /// assert_eq!(employee.attribute(GroupAttribute::Warehouse), Some("Norte"));
    /// assert_eq!(employee.attribute(GroupAttribute::Department), None);
    /// ```
    pub fn attribute(&self, attribute: GroupAttribute) -> Option<&str> {
        let value = match attribute {
            GroupAttribute::Warehouse => self.warehouse.as_deref(),
            GroupAttribute::Department => self.department.as_deref(),
            GroupAttribute::Location => self.location.as_deref(),
            GroupAttribute::Role => self.role.as_deref(),
        };
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    /// Returns the bucket this employee falls into for an attribute.
    pub fn bucket(&self, attribute: GroupAttribute) -> GroupBucket {
        GroupBucket::from_label(self.attribute(attribute))
    }
}
