//! Shift duration arithmetic.
//!
//! Elapsed time is measured on the wall clock between clock-in and clock-out.
//! A clock-out that numerically precedes the clock-in is treated as falling on
//! the following day, modelling a single overnight shift.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{ClockTime, MINUTES_PER_DAY};

/// Returns the minutes worked between `clock_in` and `clock_out`.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::elapsed_minutes;
/// use overtime_engine::models::ClockTime;
///
/// let clock_in: ClockTime = "22:00".parse().unwrap();
/// let clock_out: ClockTime = "02:00".parse().unwrap();
/// assert_eq!(elapsed_minutes(clock_in, clock_out), 240);
/// ```
pub fn elapsed_minutes(clock_in: ClockTime, clock_out: ClockTime) -> u32 {
    let start = clock_in.minutes_of_day();
    let end = clock_out.minutes_of_day();
    if end < start {
        end + MINUTES_PER_DAY - start
    } else {
        end - start
    }
}

/// Converts minutes to decimal hours as whole hours plus `minutes / 60`.
///
/// No rounding is applied: 490 minutes is `8 + 10/60` hours.
pub fn minutes_to_hours(minutes: u32) -> Decimal {
    let whole_hours = Decimal::from(minutes / 60);
    let remaining_minutes = Decimal::from(minutes % 60);
    whole_hours + remaining_minutes / Decimal::from(60)
}

/// Formats a decimal to two places for breakdown strings.
pub(crate) fn two_places(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_same_day_shift() {
        assert_eq!(elapsed_minutes(time("09:00"), time("17:30")), 510);
    }

    #[test]
    fn test_overnight_shift_wraps() {
        assert_eq!(elapsed_minutes(time("22:00"), time("02:00")), 240);
        assert_eq!(elapsed_minutes(time("23:59"), time("00:00")), 1);
    }

    #[test]
    fn test_equal_times_are_zero_minutes() {
        assert_eq!(elapsed_minutes(time("08:00"), time("08:00")), 0);
    }

    #[test]
    fn test_minutes_to_hours_exact() {
        assert_eq!(minutes_to_hours(0), Decimal::ZERO);
        assert_eq!(minutes_to_hours(60), Decimal::ONE);
        assert_eq!(minutes_to_hours(90), Decimal::new(15, 1));
        assert_eq!(minutes_to_hours(600), Decimal::from(10));
    }

    #[test]
    fn test_two_places() {
        assert_eq!(two_places(Decimal::from(8)), "8.00");
        assert_eq!(two_places(minutes_to_hours(490)), "8.17");
        assert_eq!(two_places(Decimal::new(15, 1)), "1.50");
    }

    #[test]
    fn test_minutes_to_hours_is_not_rounded() {
        let hours = minutes_to_hours(490);
        assert_eq!(hours, Decimal::from(8) + Decimal::from(10) / Decimal::from(60));
        assert!(hours > Decimal::new(81666, 4));
        assert!(hours < Decimal::new(81667, 4));
    }
}
