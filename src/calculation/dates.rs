//! Calendar-date helpers.
//!
//! All comparisons in the engine are on calendar dates with no time-of-day
//! component. Parsing fails soft: anything unrecognised becomes `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parses a calendar date from backend text.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS`
/// timestamps. For timestamps the date part is taken as written, without
/// converting between time zones.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2026, 3, 15);
/// assert_eq!(parse_calendar_date("2026-03-15"), expected);
/// assert_eq!(parse_calendar_date("2026-03-15T23:30:00-06:00"), expected);
/// assert_eq!(parse_calendar_date("15/03/2026"), None);
/// assert_eq!(parse_calendar_date(""), None);
/// ```
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.date())
}

/// Parses an optional date string, treating `None` like unparsable input.
pub fn parse_optional_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(parse_calendar_date)
}

/// Returns the range with its ends ordered.
pub fn ordered_range(a: NaiveDate, b: NaiveDate) -> (NaiveDate, NaiveDate) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Checks whether two inclusive date ranges share at least one day.
///
/// Ranges overlap iff `max(start_a, start_b) <= min(end_a, end_b)`, so ranges
/// that only touch on a boundary day overlap.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::ranges_intersect;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2026, 1, day).unwrap();
/// assert!(ranges_intersect((d(1), d(10)), (d(10), d(20))));
/// assert!(!ranges_intersect((d(1), d(9)), (d(10), d(20))));
/// ```
pub fn ranges_intersect(a: (NaiveDate, NaiveDate), b: (NaiveDate, NaiveDate)) -> bool {
    a.0.max(b.0) <= a.1.min(b.1)
}
