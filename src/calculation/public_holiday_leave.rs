//! Public holiday replacement leave.
//!
//! Hours worked on a public holiday may be converted to replacement leave, up
//! to a cap. Hours beyond the cap are paid at the holiday rate as excess pay.

use std::cmp::{max, min};

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::models::{OvertimeResult, OvertimeType};

use super::meal_allowance::weekend_meal_allowance;
use super::shift_duration::{minutes_to_hours, two_places};

/// Converts a public holiday shift of `elapsed_minutes` to replacement leave.
///
/// `hours` carries the full shift length; `leave_hours` is the capped portion.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::calculate_public_holiday_leave;
/// use overtime_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let result = calculate_public_holiday_leave(600, &PolicyConfig::default());
/// assert_eq!(result.leave_hours, Some(Decimal::from(8)));
/// assert_eq!(result.excess_pay, Decimal::from(40));
/// assert_eq!(result.total_pay, Decimal::from(53));
/// ```
pub fn calculate_public_holiday_leave(elapsed_minutes: u32, policy: &PolicyConfig) -> OvertimeResult {
    let hours = minutes_to_hours(elapsed_minutes);
    let cap = policy.public_holiday.leave_cap_hours;

    let leave_hours = min(cap, hours);
    let excess_hours = max(Decimal::ZERO, hours - cap);
    let excess_pay = excess_hours * policy.rates.weekend_hourly;
    let meal_allowance = weekend_meal_allowance(elapsed_minutes, &policy.meal_allowance);

    OvertimeResult {
        overtime_type: OvertimeType::PublicHolidayLeave,
        hours,
        leave_hours: Some(leave_hours),
        meal_allowance,
        ot_pay: Decimal::ZERO,
        excess_pay,
        total_pay: excess_pay + meal_allowance,
        breakdown: format!("{} hours leave", two_places(leave_hours)),
    }
}
