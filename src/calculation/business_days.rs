//! Business-day counting.
//!
//! In this domain every day except Sunday is a business day; Saturdays count.

use chrono::{Datelike, NaiveDate, Weekday};

use super::dates::ordered_range;

/// Checks whether a date is a business day (anything but Sunday).
pub fn is_business_day(date: NaiveDate) -> bool {
    date.weekday() != Weekday::Sun
}

/// Counts business days in an inclusive date range.
///
/// The ends may be given in either order. Missing dates yield 0.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::business_days_inclusive;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2026, 1, day);
/// assert_eq!(business_days_inclusive(d(5), d(5)), 1);   // Monday
/// assert_eq!(business_days_inclusive(d(4), d(4)), 0);   // Sunday
/// assert_eq!(business_days_inclusive(d(5), d(11)), 6);  // Mon..Sun
/// assert_eq!(business_days_inclusive(None, d(11)), 0);
/// ```
pub fn business_days_inclusive(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> u32 {
    let (Some(start), Some(end)) = (start_date, end_date) else {
        return 0;
    };
    let (first, last) = ordered_range(start, end);

    let total_days = (last - first).num_days() + 1;
    let full_weeks = total_days / 7;
    let leftover = total_days % 7;

    // Each full week holds exactly one Sunday.
    let mut count = full_weeks * 6;
    let tail_start = first + chrono::Duration::days(full_weeks * 7);
    count += tail_start
        .iter_days()
        .take(leftover as usize)
        .filter(|day| is_business_day(*day))
        .count() as i64;

    u32::try_from(count).unwrap_or(u32::MAX)
}
