//! Validation of a new vacation request against the employee's balance.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{VacationError, VacationResult};
use crate::models::{Employee, EntitlementResult};

use super::{business_days_inclusive, calculate_entitlement};

/// Outcome of a successful request check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestAssessment {
    /// Business days the new request covers.
    pub requested_days: u32,
    /// The balance before the request.
    pub entitlement: EntitlementResult,
    /// Days left if the request is granted.
    pub remaining_after: u32,
}

/// Checks whether an employee may request `[start, end]`.
///
/// Unlike the calculators, this reports problems as errors:
///
/// - missing dates, an end before the start, or a range with no business
///   days give [`VacationError::InvalidRequest`];
/// - an employee without a hire date gives [`VacationError::InvalidEmployee`];
/// - more business days than remain gives [`VacationError::InsufficientBalance`].
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::check_new_request;
/// use vacation_engine::models::Employee;
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Ana Torres".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2023, 1, 10),
///     warehouse: Some("Norte".to_string()),
///     department: None,
///     location: None,
///     role: None,
/// };
/// let reference = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
///
/// // Mon 2026-02-02 .. Sat 2026-02-07: 6 business days out of 16 - 4 = 12
/// let assessment = check_new_request(
///     &employee,
///     NaiveDate::from_ymd_opt(2026, 2, 2),
///     NaiveDate::from_ymd_opt(2026, 2, 7),
///     reference,
///     4,
/// ).unwrap();
/// assert_eq!(assessment.requested_days, 6);
/// assert_eq!(assessment.remaining_after, 6);
/// ```
pub fn check_new_request(
    employee: &Employee,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    reference_date: NaiveDate,
    used_days: u32,
) -> VacationResult<RequestAssessment> {
    let (Some(start), Some(end)) = (start_date, end_date) else {
        return Err(VacationError::InvalidRequest {
            request_id: String::new(),
            message: "start and end dates are required".to_string(),
        });
    };

    if end < start {
        return Err(VacationError::InvalidRequest {
            request_id: String::new(),
            message: format!("end date {} is before start date {}", end, start),
        });
    }

    if employee.hire_date.is_none() {
        return Err(VacationError::InvalidEmployee {
            field: "hire_date".to_string(),
            message: format!("employee '{}' has no hire date", employee.id),
        });
    }

    let requested_days = business_days_inclusive(Some(start), Some(end));
    if requested_days == 0 {
        return Err(VacationError::InvalidRequest {
            request_id: String::new(),
            message: "the range contains no business days".to_string(),
        });
    }

    let entitlement = calculate_entitlement(employee.hire_date, Some(reference_date), used_days);
    debug!(
        employee_id = %employee.id,
        requested_days,
        remaining = entitlement.remaining_days,
        "Checking vacation request"
    );

    if requested_days > entitlement.remaining_days {
        return Err(VacationError::InsufficientBalance {
            requested: requested_days,
            remaining: entitlement.remaining_days,
        });
    }

    Ok(RequestAssessment {
        requested_days,
        remaining_after: entitlement.remaining_days - requested_days,
        entitlement,
    })
}
