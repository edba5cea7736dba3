//! Entitlement result model.

use serde::{Deserialize, Serialize};

/// The vacation balance of an employee as of a reference date.
///
/// `remaining_days` is always `max(allotment_days - used_days, 0)`. A result
/// of all zeros means "insufficient information" (for example an unparsable
/// hire date), not a validated zero balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementResult {
    /// Completed years of service at the reference date.
    pub years_completed: u32,
    /// Statutory vacation days for the current service year.
    pub allotment_days: u32,
    /// Days already consumed, as reported by the caller.
    pub used_days: u32,
    /// Days left to request.
    pub remaining_days: u32,
}

impl EntitlementResult {
    /// Returns true when the employee has no days left to request.
    pub fn is_exhausted(&self) -> bool {
        self.remaining_days == 0
    }
}
