//! Completed years of service.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// Counts the full years of service between a hire date and a reference date.
///
/// The calendar-year difference is reduced by one when the reference date
/// falls before the hire date's month/day anniversary in the reference year.
/// The result is floored at 0, and a missing date yields 0.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::years_completed;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2020, 3, 15);
/// assert_eq!(years_completed(hire, NaiveDate::from_ymd_opt(2026, 3, 14)), 5);
/// assert_eq!(years_completed(hire, NaiveDate::from_ymd_opt(2026, 3, 15)), 6);
/// assert_eq!(years_completed(None, NaiveDate::from_ymd_opt(2026, 3, 15)), 0);
/// ```
pub fn years_completed(hire_date: Option<NaiveDate>, reference_date: Option<NaiveDate>) -> u32 {
    let (Some(hire), Some(reference)) = (hire_date, reference_date) else {
        debug!(?hire_date, ?reference_date, "Missing date for years of service");
        return 0;
    };

    let mut years = reference.year() - hire.year();
    if (reference.month(), reference.day()) < (hire.month(), hire.day()) {
        years -= 1;
    }

    u32::try_from(years).unwrap_or(0)
}
