//! Vacation balance: used and remaining days.

use chrono::NaiveDate;

use crate::models::{EntitlementResult, RequestStatus, VacationRequest};

use super::{allotment_days, years_completed};

/// Returns the days left after subtracting used days from the allotment.
///
/// Floors at 0: an administrative override may have granted more days than
/// the allotment, which is not an error.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::remaining_days;
///
/// assert_eq!(remaining_days(14, 5), 9);
/// assert_eq!(remaining_days(14, 14), 0);
/// assert_eq!(remaining_days(14, 20), 0);
/// ```
pub fn remaining_days(allotment: u32, used: u32) -> u32 {
    allotment.saturating_sub(used)
}

/// Sums the business days of the requests whose status consumes balance.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::used_days;
/// use vacation_engine::models::{RequestStatus, VacationRequest};
/// use chrono::NaiveDate;
///
/// let request = |id: &str, status| VacationRequest {
///     id: id.to_string(),
///     employee_id: "emp_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 9).unwrap(),
///     status,
///     created_at: None,
/// };
/// let requests = vec![
///     request("a", RequestStatus::Approved),
///     request("b", RequestStatus::Rejected),
/// ];
/// assert_eq!(used_days(&requests, &[RequestStatus::Approved, RequestStatus::Pending]), 5);
/// ```
pub fn used_days<'a, I>(requests: I, consuming_statuses: &[RequestStatus]) -> u32
where
    I: IntoIterator<Item = &'a VacationRequest>,
{
    requests
        .into_iter()
        .filter(|request| consuming_statuses.contains(&request.status))
        .map(VacationRequest::business_days)
        .fold(0u32, u32::saturating_add)
}

/// Computes an employee's entitlement as of a reference date.
///
/// When either date is missing the allotment and remaining balance are 0,
/// meaning "insufficient information" rather than an exhausted balance.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::calculate_entitlement;
/// use chrono::NaiveDate;
///
/// let result = calculate_entitlement(
///     NaiveDate::from_ymd_opt(2020, 3, 15),
///     NaiveDate::from_ymd_opt(2026, 3, 15),
///     5,
/// );
/// assert_eq!(result.years_completed, 6);
/// assert_eq!(result.allotment_days, 22);
/// assert_eq!(result.remaining_days, 17);
/// ```
pub fn calculate_entitlement(
    hire_date: Option<NaiveDate>,
    reference_date: Option<NaiveDate>,
    used: u32,
) -> EntitlementResult {
    if hire_date.is_none() || reference_date.is_none() {
        return EntitlementResult {
            years_completed: 0,
            allotment_days: 0,
            used_days: used,
            remaining_days: 0,
        };
    }

    let years = years_completed(hire_date, reference_date);
    let allotment = allotment_days(years);

    EntitlementResult {
        years_completed: years,
        allotment_days: allotment,
        used_days: used,
        remaining_days: remaining_days(allotment, used),
    }
}
