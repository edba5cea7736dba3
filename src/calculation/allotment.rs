//! Statutory vacation-day allotment.
//!
//! Encodes the step table of the Mexican Federal Labour Law (LFT, 2023
//! reform), article 76: 12 days for the first year, two more for each year up
//! to the fifth, then two more for every block of five years of service.

/// Days granted for years of service one through five.
const FIRST_YEARS: [u32; 5] = [12, 14, 16, 18, 20];

/// Days granted in the first year of the 6–10 block.
const SIXTH_YEAR_DAYS: u32 = 22;

/// Length of each block after year five.
const BLOCK_YEARS: u32 = 5;

/// Extra days granted per completed block.
const DAYS_PER_BLOCK: u32 = 2;

/// Returns the statutory allotment for a number of completed years of service.
///
/// | years  | days |
/// |--------|------|
/// | 0–1    | 12   |
/// | 2      | 14   |
/// | 3      | 16   |
/// | 4      | 18   |
/// | 5      | 20   |
/// | 6–10   | 22   |
/// | 11–15  | 24   |
/// | 16–20  | 26   |
///
/// and so on, two more days for every five years.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::allotment_days;
///
/// assert_eq!(allotment_days(0), 12);
/// assert_eq!(allotment_days(5), 20);
/// assert_eq!(allotment_days(10), 22);
/// assert_eq!(allotment_days(11), 24);
/// ```
pub fn allotment_days(years_completed: u32) -> u32 {
    match years_completed {
        0 => FIRST_YEARS[0],
        1..=5 => FIRST_YEARS[(years_completed - 1) as usize],
        years => SIXTH_YEAR_DAYS + DAYS_PER_BLOCK * ((years - 6) / BLOCK_YEARS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_years_table() {
        assert_eq!(allotment_days(0), 12);
        assert_eq!(allotment_days(1), 12);
        assert_eq!(allotment_days(2), 14);
        assert_eq!(allotment_days(3), 16);
        assert_eq!(allotment_days(4), 18);
        assert_eq!(allotment_days(5), 20);
    }

    #[test]
    fn test_block_boundaries() {
        assert_eq!(allotment_days(6), 22);
        assert_eq!(allotment_days(10), 22);
        assert_eq!(allotment_days(11), 24);
        assert_eq!(allotment_days(15), 24);
        assert_eq!(allotment_days(16), 26);
        assert_eq!(allotment_days(20), 26);
        assert_eq!(allotment_days(21), 28);
        assert_eq!(allotment_days(26), 30);
        assert_eq!(allotment_days(31), 32);
    }

    #[test]
    fn test_monotonic_over_career() {
        for years in 0..60 {
            assert!(allotment_days(years) <= allotment_days(years + 1));
        }
    }

    #[test]
    fn test_large_year_count_does_not_overflow() {
        assert!(allotment_days(u32::MAX) > 0);
    }
}
