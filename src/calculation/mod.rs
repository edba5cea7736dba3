//! Calculation logic for the vacation engine.
//!
//! This module contains the entitlement calculator (years of service,
//! statutory allotment, business days, remaining balance), the overlap
//! detector, and the helpers built on them: filter selections, daily
//! concurrency and validation of new requests.
//!
//! The calculators are pure functions over their arguments and never fail:
//! missing or malformed dates degrade to 0 or empty results.

mod allotment;
mod balance;
mod business_days;
mod concurrency;
mod dates;
mod filters;
mod overlap;
mod request_check;
mod service_years;

pub use allotment::allotment_days;
pub use balance::{calculate_entitlement, remaining_days, used_days};
pub use business_days::{business_days_inclusive, is_business_day};
pub use concurrency::{ConcurrencyLevel, DayLoad, daily_concurrency};
pub use dates::{ordered_range, parse_calendar_date, parse_optional_date, ranges_intersect};
pub use filters::{FilterState, filter_requests, group_buckets};
pub use overlap::{
    OverlapCandidate, OverlapIndex, compute_overlaps, compute_overlaps_sweep, overlap_candidates,
};
pub use request_check::{RequestAssessment, check_new_request};
pub use service_years::years_completed;
