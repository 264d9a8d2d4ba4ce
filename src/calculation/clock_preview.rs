//! Clock-out previews and the live shift countdown.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::config::WeekdayRules;
use crate::models::ClockTime;

/// Earliest clock-out that completes the standard day.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::minimum_clock_out_time;
/// use overtime_engine::config::WeekdayRules;
/// use overtime_engine::models::ClockTime;
///
/// let clock_in: ClockTime = "08:00".parse().unwrap();
/// assert_eq!(minimum_clock_out_time(clock_in, &WeekdayRules::default()).to_string(), "16:30");
/// ```
pub fn minimum_clock_out_time(clock_in: ClockTime, rules: &WeekdayRules) -> ClockTime {
    clock_in.add_minutes_wrapping(rules.standard_day_minutes)
}

/// Time at which weekday overtime starts accruing.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::overtime_start_time;
/// use overtime_engine::config::WeekdayRules;
/// use overtime_engine::models::ClockTime;
///
/// let clock_in: ClockTime = "22:00".parse().unwrap();
/// assert_eq!(overtime_start_time(clock_in, &WeekdayRules::default()).to_string(), "07:00");
/// ```
pub fn overtime_start_time(clock_in: ClockTime, rules: &WeekdayRules) -> ClockTime {
    clock_in.add_minutes_wrapping(rules.overtime_start_minutes())
}

/// Time left until the standard day completes, or time worked past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCountdown {
    /// When the standard day completes.
    pub finish_at: NaiveDateTime,
    /// True once `now` is past `finish_at`.
    pub is_overtime: bool,
    /// Whole hours of the remaining or overtime duration.
    pub hours: i64,
    /// Minutes component (0-59).
    pub minutes: i64,
    /// Seconds component (0-59).
    pub seconds: i64,
}

/// Counts down to the end of a standard day that started at `clock_in` today.
///
/// The finish time is anchored on `now`'s date, so a clock-in late in the
/// evening finishes on the following day.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::shift_countdown;
/// use overtime_engine::config::WeekdayRules;
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap().and_hms_opt(15, 0, 0).unwrap();
/// let countdown = shift_countdown("08:00".parse().unwrap(), now, &WeekdayRules::default());
///
/// assert!(!countdown.is_overtime);
/// assert_eq!((countdown.hours, countdown.minutes, countdown.seconds), (1, 30, 0));
/// ```
pub fn shift_countdown(clock_in: ClockTime, now: NaiveDateTime, rules: &WeekdayRules) -> ShiftCountdown {
    let started_at = now.date().and_time(NaiveTime::MIN)
        + Duration::minutes(i64::from(clock_in.minutes_of_day()));
    let finish_at = started_at + Duration::minutes(i64::from(rules.standard_day_minutes));

    let diff = finish_at - now;
    let is_overtime = diff < Duration::zero();
    let total_seconds = diff.num_seconds().abs();

    ShiftCountdown {
        finish_at,
        is_overtime,
        hours: total_seconds / 3600,
        minutes: (total_seconds % 3600) / 60,
        seconds: total_seconds % 60,
    }
}
