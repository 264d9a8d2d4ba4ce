//! Weekend and public holiday overtime calculation.
//!
//! ## Rate Structure
//!
//! **Weekend and public holiday work is NOT thresholded (unlike weekday overtime):**
//! - Every hour on the clock counts as overtime, at the flat weekend/holiday rate
//! - A meal allowance applies once the shift reaches 4 hours
//!
//! A public holiday compensated as leave is delegated to
//! [`calculate_public_holiday_leave`](super::calculate_public_holiday_leave).

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::models::{OvertimeResult, OvertimeType, PublicHolidayOption};

use super::day_detection::DayType;
use super::meal_allowance::weekend_meal_allowance;
use super::public_holiday_leave::calculate_public_holiday_leave;
use super::shift_duration::{minutes_to_hours, two_places};

/// Calculates overtime for a weekend or public holiday shift.
///
/// # Arguments
///
/// * `elapsed_minutes` - Minutes between clock-in and clock-out
/// * `day_type` - Either [`DayType::Weekend`] or [`DayType::PublicHoliday`]
/// * `option` - How public holiday work is compensated (ignored on weekends)
/// * `policy` - The overtime policy
///
/// # Returns
///
/// An [`OvertimeResult`] of type `Weekend`, `PublicHoliday` or
/// `PublicHolidayLeave`. A [`DayType::Weekday`] is treated as a weekend day;
/// callers route weekdays to
/// [`calculate_weekday_overtime`](super::calculate_weekday_overtime).
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{calculate_weekend_overtime, DayType};
/// use overtime_engine::config::PolicyConfig;
/// use overtime_engine::models::{OvertimeType, PublicHolidayOption};
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
///
/// // 8h10m on a Saturday
/// let result = calculate_weekend_overtime(490, DayType::Weekend, PublicHolidayOption::Pay, &policy);
/// assert_eq!(result.overtime_type, OvertimeType::Weekend);
/// assert_eq!(result.meal_allowance, Decimal::from(13));
/// assert_eq!(result.total_pay, result.hours * Decimal::from(20) + Decimal::from(13));
/// ```
pub fn calculate_weekend_overtime(
    elapsed_minutes: u32,
    day_type: DayType,
    option: PublicHolidayOption,
    policy: &PolicyConfig,
) -> OvertimeResult {
    if day_type == DayType::PublicHoliday && option == PublicHolidayOption::Leave {
        return calculate_public_holiday_leave(elapsed_minutes, policy);
    }

    let hours = minutes_to_hours(elapsed_minutes);
    let rate = policy.rates.weekend_hourly;
    let meal_allowance = weekend_meal_allowance(elapsed_minutes, &policy.meal_allowance);
    let ot_pay = hours * rate;

    let overtime_type = match day_type {
        DayType::PublicHoliday => OvertimeType::PublicHoliday,
        DayType::Weekend | DayType::Weekday => OvertimeType::Weekend,
    };

    OvertimeResult {
        overtime_type,
        hours,
        leave_hours: None,
        meal_allowance,
        ot_pay,
        excess_pay: Decimal::ZERO,
        total_pay: ot_pay + meal_allowance,
        breakdown: format!("{}h × {}{}", two_places(hours), policy.currency, rate.normalize()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    // ==========================================================================
    // WEOT-001: Saturday 8h10m
    // ==========================================================================
    #[test]
    fn test_weot_001_saturday_eight_hours_ten_minutes() {
        let policy = PolicyConfig::default();
        let result = calculate_weekend_overtime(490, DayType::Weekend, PublicHolidayOption::Pay, &policy);

        let expected_hours = dec("8") + dec("10") / dec("60");
        assert_eq!(result.overtime_type, OvertimeType::Weekend);
        assert_eq!(result.hours, expected_hours);
        assert_eq!(result.meal_allowance, dec("13"));
        assert_eq!(result.ot_pay, expected_hours * dec("20"));
        assert_eq!(result.total_pay, expected_hours * dec("20") + dec("13"));
        assert_eq!(result.excess_pay, Decimal::ZERO);
        assert_eq!(result.breakdown, "8.17h × RM20");
    }

    // ==========================================================================
    // WEOT-002: short weekend shift earns no meal allowance
    // ==========================================================================
    #[test]
    fn test_weot_002_short_shift_no_meal() {
        let policy = PolicyConfig::default();
        let result = calculate_weekend_overtime(180, DayType::Weekend, PublicHolidayOption::Pay, &policy);

        assert_eq!(result.hours, dec("3"));
        assert_eq!(result.meal_allowance, Decimal::ZERO);
        assert_eq!(result.total_pay, dec("60"));
    }

    // ==========================================================================
    // WEOT-003: public holiday paid at the holiday rate
    // ==========================================================================
    #[test]
    fn test_weot_003_public_holiday_pay() {
        let policy = PolicyConfig::default();
        let result =
            calculate_weekend_overtime(300, DayType::PublicHoliday, PublicHolidayOption::Pay, &policy);

        assert_eq!(result.overtime_type, OvertimeType::PublicHoliday);
        assert_eq!(result.hours, dec("5"));
        assert_eq!(result.ot_pay, dec("100"));
        assert_eq!(result.total_pay, dec("113"));
        assert_eq!(result.leave_hours, None);
    }

    // ==========================================================================
    // WEOT-004: leave option is ignored on a plain weekend
    // ==========================================================================
    #[test]
    fn test_weot_004_leave_option_ignored_on_weekend() {
        let policy = PolicyConfig::default();
        let result =
            calculate_weekend_overtime(600, DayType::Weekend, PublicHolidayOption::Leave, &policy);

        assert_eq!(result.overtime_type, OvertimeType::Weekend);
        assert_eq!(result.total_pay, dec("213"));
    }

    #[test]
    fn test_public_holiday_leave_is_delegated() {
        let policy = PolicyConfig::default();
        let result =
            calculate_weekend_overtime(600, DayType::PublicHoliday, PublicHolidayOption::Leave, &policy);

        assert_eq!(result.overtime_type, OvertimeType::PublicHolidayLeave);
        assert_eq!(result.leave_hours, Some(dec("8")));
    }

    #[test]
    fn test_zero_length_shift() {
        let policy = PolicyConfig::default();
        let result = calculate_weekend_overtime(0, DayType::Weekend, PublicHolidayOption::Pay, &policy);

        assert_eq!(result.hours, Decimal::ZERO);
        assert_eq!(result.total_pay, Decimal::ZERO);
        assert_eq!(result.components_total(), result.total_pay);
    }
}
