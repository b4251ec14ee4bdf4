//! Date-window arithmetic for alert and reminder thresholds.
//!
//! Every threshold the scan logic compares against lives here as a named
//! constant so the windows stay testable and documented in one place.

use chrono::{Days, NaiveDate};

/// Days ahead of the due date at which a pending invoice gets a
/// payment-reminder alert.
pub const REMINDER_WINDOW_DAYS: u64 = 3;

/// Days ahead of the contract end date at which an active lease is
/// flagged as expiring.
pub const EXPIRY_WINDOW_DAYS: u64 = 30;

/// How far back a completed maintenance request still produces an alert.
pub const MAINTENANCE_LOOKBACK_DAYS: u64 = 7;

/// Default look-ahead for WhatsApp reminder eligibility.
pub const WHATSAPP_DEFAULT_WINDOW_DAYS: u64 = 5;

/// True when `date` falls in the inclusive window `[today, today + days]`.
pub fn within_upcoming_window(today: NaiveDate, date: NaiveDate, days: u64) -> bool {
    date >= today && date <= add_days(today, days)
}

/// True when `date` falls in the inclusive window `[today - days, today]`.
pub fn within_recent_window(today: NaiveDate, date: NaiveDate, days: u64) -> bool {
    date <= today && date >= sub_days(today, days)
}

/// `date + days`, saturating at the calendar maximum.
pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

/// `date - days`, saturating at the calendar minimum.
pub fn sub_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_upcoming_window_bounds_inclusive() {
        let today = d(2024, 3, 1);
        assert!(within_upcoming_window(today, d(2024, 3, 1), 3));
        assert!(within_upcoming_window(today, d(2024, 3, 4), 3));
        assert!(!within_upcoming_window(today, d(2024, 3, 5), 3));
        assert!(!within_upcoming_window(today, d(2024, 2, 29), 3));
    }

    #[test]
    fn test_expiry_window_exact_upper_bound() {
        let today = d(2024, 1, 1);
        let end = add_days(today, EXPIRY_WINDOW_DAYS);
        assert_eq!(end, d(2024, 1, 31));
        assert!(within_upcoming_window(today, end, EXPIRY_WINDOW_DAYS));
    }

    #[test]
    fn test_recent_window_bounds_inclusive() {
        let today = d(2024, 3, 10);
        assert!(within_recent_window(today, d(2024, 3, 10), 7));
        assert!(within_recent_window(today, d(2024, 3, 3), 7));
        assert!(!within_recent_window(today, d(2024, 3, 2), 7));
        assert!(!within_recent_window(today, d(2024, 3, 11), 7));
    }

    #[test]
    fn test_window_crosses_month_boundary() {
        let today = d(2024, 2, 28);
        // 2024 is a leap year
        assert_eq!(add_days(today, 3), d(2024, 3, 2));
        assert!(within_upcoming_window(today, d(2024, 3, 1), REMINDER_WINDOW_DAYS));
    }
}
