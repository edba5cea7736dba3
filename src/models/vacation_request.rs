//! Vacation request model and status labels.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::calculation::business_days_inclusive;

/// The lifecycle status of a vacation request.
///
/// Serialized with the labels the backend's CHECK constraint accepts;
/// English snake-case labels are accepted on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Drafted by a manager but not yet submitted.
    #[serde(rename = "Propuesta", alias = "proposed")]
    Proposed,
    /// Submitted and awaiting a decision.
    #[serde(rename = "Pendiente", alias = "pending")]
    Pending,
    /// Approved by a manager or admin.
    #[serde(rename = "Aprobado", alias = "approved")]
    Approved,
    /// Rejected by a manager or admin.
    #[serde(rename = "Rechazado", alias = "rejected")]
    Rejected,
}

impl RequestStatus {
    /// Parses a backend or English label, ignoring case and surrounding whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::RequestStatus;
    ///
    /// assert_eq!(RequestStatus::from_label("Aprobado"), Some(RequestStatus::Approved));
    /// assert_eq!(RequestStatus::from_label(" pending "), Some(RequestStatus::Pending));
    /// assert_eq!(RequestStatus::from_label("archived"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "propuesta" | "proposed" => Some(RequestStatus::Proposed),
            "pendiente" | "pending" => Some(RequestStatus::Pending),
            "aprobado" | "approved" => Some(RequestStatus::Approved),
            "rechazado" | "rejected" => Some(RequestStatus::Rejected),
            _ => None,
        }
    }

    /// Returns the backend label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Proposed => "Propuesta",
            RequestStatus::Pending => "Pendiente",
            RequestStatus::Approved => "Aprobado",
            RequestStatus::Rejected => "Rechazado",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A vacation request as fetched from the backend.
///
/// Treated as an immutable value for the duration of one computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The employee who requested the vacation.
    pub employee_id: String,
    /// First day of vacation (inclusive).
    pub start_date: NaiveDate,
    /// Last day of vacation (inclusive).
    pub end_date: NaiveDate,
    /// Current status.
    pub status: RequestStatus,
    /// When the request was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl VacationRequest {
    /// Returns the date range with start and end swapped if they were entered backwards.
    pub fn normalized_range(&self) -> (NaiveDate, NaiveDate) {
        if self.start_date <= self.end_date {
            (self.start_date, self.end_date)
        } else {
            (self.end_date, self.start_date)
        }
    }

    /// Returns the number of business days (every day but Sunday) the request covers.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::{RequestStatus, VacationRequest};
    /// use chrono::NaiveDate;
    ///
    /// let request = VacationRequest {
    ///     id: "req_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),  // Monday
    ///     end_date: NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),   // Sunday
    ///     status: RequestStatus::Pending,
    ///     created_at: None,
    /// };
    /// assert_eq!(request.business_days(), 6);
    /// ```
    pub fn business_days(&self) -> u32 {
        business_days_inclusive(Some(self.start_date), Some(self.end_date))
    }
}
