//! Day classification.
//!
//! Routes a single day's entry to the weekday, weekend or public holiday rule
//! and produces its [`OvertimeResult`].

use crate::config::PolicyConfig;
use crate::models::{OvertimeResult, TimeEntry};

use super::day_detection::{DayType, get_day_type};
use super::shift_duration::elapsed_minutes;
use super::weekday_overtime::calculate_weekday_overtime;
use super::weekend_overtime::calculate_weekend_overtime;

/// Classifies one day's entry.
///
/// Returns `None` when either clock time is missing; such an entry is not yet
/// computable. Classification depends only on the entry's date, times, holiday
/// flag and option, so repeated calls give identical results.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::classify;
/// use overtime_engine::config::PolicyConfig;
/// use overtime_engine::models::{ClockTime, OvertimeType, TimeEntry};
/// use chrono::NaiveDate;
///
/// let policy = PolicyConfig::default();
/// let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
///
/// let entry = TimeEntry::new(monday, "08:00".parse().ok(), "18:00".parse().ok());
/// let result = classify(&entry, &policy).unwrap();
/// assert_eq!(result.overtime_type, OvertimeType::Weekday);
///
/// let incomplete = TimeEntry::new(monday, "08:00".parse::<ClockTime>().ok(), None);
/// assert!(classify(&incomplete, &policy).is_none());
/// ```
pub fn classify(entry: &TimeEntry, policy: &PolicyConfig) -> Option<OvertimeResult> {
    let (clock_in, clock_out) = (entry.clock_in?, entry.clock_out?);
    let elapsed = elapsed_minutes(clock_in, clock_out);

    let result = match get_day_type(entry) {
        DayType::Weekday => calculate_weekday_overtime(elapsed, policy),
        day_type => calculate_weekend_overtime(elapsed, day_type, entry.public_holiday_option, policy),
    };
    Some(result)
}

/// Returns a copy of `entry` with its result recomputed.
pub fn classify_entry(entry: &TimeEntry, policy: &PolicyConfig) -> TimeEntry {
    TimeEntry {
        result: classify(entry, policy),
        ..entry.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OvertimeType, PublicHolidayOption};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_entry(date: &str, clock_in: &str, clock_out: &str) -> TimeEntry {
        TimeEntry::new(make_date(date), clock_in.parse().ok(), clock_out.parse().ok())
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    // ==========================================================================
    // CL-001: weekday routing
    // ==========================================================================
    #[test]
    fn test_cl_001_weekday_routing() {
        let policy = PolicyConfig::default();

        // Monday 08:00-17:00 = 540 minutes
        let no_ot = classify(&make_entry("2025-01-06", "08:00", "17:00"), &policy).unwrap();
        assert_eq!(no_ot.overtime_type, OvertimeType::NoOt);

        // Monday 08:00-18:00 = 600 minutes
        let weekday = classify(&make_entry("2025-01-06", "08:00", "18:00"), &policy).unwrap();
        assert_eq!(weekday.overtime_type, OvertimeType::Weekday);
        assert_eq!(weekday.hours, dec("1"));
        assert_eq!(weekday.total_pay, dec("26"));
    }

    // ==========================================================================
    // CL-002: weekend routing
    // ==========================================================================
    #[test]
    fn test_cl_002_weekend_routing() {
        let policy = PolicyConfig::default();

        // Saturday 09:00-17:10 = 490 minutes
        let result = classify(&make_entry("2025-01-04", "09:00", "17:10"), &policy).unwrap();
        assert_eq!(result.overtime_type, OvertimeType::Weekend);
        assert_eq!(result.hours, dec("8") + dec("10") / dec("60"));
        assert_eq!(result.meal_allowance, dec("13"));
    }

    // ==========================================================================
    // CL-003: public holiday routing, both options
    // ==========================================================================
    #[test]
    fn test_cl_003_public_holiday_routing() {
        let policy = PolicyConfig::default();
        let base = make_entry("2025-08-29", "08:00", "18:00");

        let pay = classify(&base.clone().with_public_holiday(PublicHolidayOption::Pay), &policy).unwrap();
        assert_eq!(pay.overtime_type, OvertimeType::PublicHoliday);
        assert_eq!(pay.total_pay, dec("213"));

        let leave = classify(&base.with_public_holiday(PublicHolidayOption::Leave), &policy).unwrap();
        assert_eq!(leave.overtime_type, OvertimeType::PublicHolidayLeave);
        assert_eq!(leave.total_pay, dec("53"));
    }

    // ==========================================================================
    // CL-004: overnight shift wraps past midnight
    // ==========================================================================
    #[test]
    fn test_cl_004_overnight_shift() {
        let policy = PolicyConfig::default();

        // Saturday 22:00 to Sunday 02:00 = 240 minutes, dated on the start
        let result = classify(&make_entry("2025-01-04", "22:00", "02:00"), &policy).unwrap();
        assert_eq!(result.hours, dec("4"));
        assert_eq!(result.meal_allowance, dec("13"));
        assert_eq!(result.total_pay, dec("93"));
    }

    #[test]
    fn test_missing_times_are_not_computable() {
        let policy = PolicyConfig::default();
        let date = make_date("2025-01-06");

        assert!(classify(&TimeEntry::new(date, None, None), &policy).is_none());
        assert!(classify(&TimeEntry::new(date, "08:00".parse().ok(), None), &policy).is_none());
        assert!(classify(&TimeEntry::new(date, None, "17:00".parse().ok()), &policy).is_none());
    }

    #[test]
    fn test_classify_entry_is_idempotent() {
        let policy = PolicyConfig::default();
        let entry = make_entry("2025-01-06", "07:45", "19:20");

        let once = classify_entry(&entry, &policy);
        let twice = classify_entry(&once, &policy);
        assert_eq!(once, twice);
        assert_eq!(once.id, entry.id);
        assert!(once.result.is_some());
    }
}
