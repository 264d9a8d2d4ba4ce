//! Weekday overtime calculation.
//!
//! ## Rule Structure
//!
//! A weekday shift earns overtime only after the standard day (8.5h) plus a
//! mandatory 30 minute break. Overtime under one hour is forfeited entirely.
//! Claimable overtime is paid per exact decimal hour at the weekday rate, plus
//! a flat meal allowance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{PolicyConfig, WeekdayRules};
use crate::models::{OvertimeResult, OvertimeType};

use super::meal_allowance::weekday_meal_allowance;
use super::shift_duration::{minutes_to_hours, two_places};

/// Outcome of checking a weekday shift against the overtime thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum WeekdayOvertimeDetection {
    /// The shift did not exceed the standard day.
    WithinStandardDay,
    /// The shift ended during the mandatory break after the standard day.
    WithinBreak,
    /// Overtime accrued but fell short of the minimum claim.
    BelowMinimumClaim {
        /// Minutes worked past the break.
        overtime_minutes: u32,
    },
    /// Overtime is payable.
    Claimable {
        /// Minutes worked past the break.
        overtime_minutes: u32,
    },
}

/// Checks a weekday shift of `elapsed_minutes` against the overtime thresholds.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{detect_weekday_overtime, WeekdayOvertimeDetection};
/// use overtime_engine::config::WeekdayRules;
///
/// let rules = WeekdayRules::default();
/// assert_eq!(
///     detect_weekday_overtime(599, &rules),
///     WeekdayOvertimeDetection::BelowMinimumClaim { overtime_minutes: 59 }
/// );
/// assert_eq!(
///     detect_weekday_overtime(600, &rules),
///     WeekdayOvertimeDetection::Claimable { overtime_minutes: 60 }
/// );
/// ```
pub fn detect_weekday_overtime(elapsed_minutes: u32, rules: &WeekdayRules) -> WeekdayOvertimeDetection {
    if elapsed_minutes <= rules.standard_day_minutes {
        return WeekdayOvertimeDetection::WithinStandardDay;
    }

    let overtime_start = rules.overtime_start_minutes();
    if elapsed_minutes <= overtime_start {
        return WeekdayOvertimeDetection::WithinBreak;
    }

    let overtime_minutes = elapsed_minutes - overtime_start;
    if overtime_minutes < rules.minimum_claim_minutes {
        WeekdayOvertimeDetection::BelowMinimumClaim { overtime_minutes }
    } else {
        WeekdayOvertimeDetection::Claimable { overtime_minutes }
    }
}

/// Calculates weekday overtime pay for a shift of `elapsed_minutes`.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::calculate_weekday_overtime;
/// use overtime_engine::config::PolicyConfig;
/// use overtime_engine::models::OvertimeType;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
///
/// // 10 hours on the clock: 8.5h standard + 0.5h break + 1h overtime
/// let result = calculate_weekday_overtime(600, &policy);
/// assert_eq!(result.overtime_type, OvertimeType::Weekday);
/// assert_eq!(result.hours, Decimal::ONE);
/// assert_eq!(result.total_pay, Decimal::from(26));
/// ```
pub fn calculate_weekday_overtime(elapsed_minutes: u32, policy: &PolicyConfig) -> OvertimeResult {
    let rules = &policy.weekday;

    let overtime_minutes = match detect_weekday_overtime(elapsed_minutes, rules) {
        WeekdayOvertimeDetection::WithinStandardDay => {
            return OvertimeResult::no_overtime(format!(
                "Less than {} hours",
                minutes_to_hours(rules.standard_day_minutes).normalize()
            ));
        }
        WeekdayOvertimeDetection::WithinBreak => {
            return OvertimeResult::no_overtime(format!(
                "Less than {} hours",
                minutes_to_hours(rules.overtime_start_minutes()).normalize()
            ));
        }
        WeekdayOvertimeDetection::BelowMinimumClaim { .. } => {
            let minimum_hours = minutes_to_hours(rules.minimum_claim_minutes).normalize();
            let unit = if minimum_hours == Decimal::ONE { "hour" } else { "hours" };
            return OvertimeResult::no_overtime(format!(
                "Less than {} {} OT (minimum required)",
                minimum_hours, unit
            ));
        }
        WeekdayOvertimeDetection::Claimable { overtime_minutes } => overtime_minutes,
    };

    let hours = minutes_to_hours(overtime_minutes);
    let rate = policy.rates.weekday_overtime;
    let meal_allowance = weekday_meal_allowance(&policy.meal_allowance);
    let ot_pay = hours * rate;

    OvertimeResult {
        overtime_type: OvertimeType::Weekday,
        hours,
        leave_hours: None,
        meal_allowance,
        ot_pay,
        excess_pay: Decimal::ZERO,
        total_pay: ot_pay + meal_allowance,
        breakdown: format!(
            "{}h × {}{} + {}{} meal",
            two_places(hours),
            policy.currency,
            rate.normalize(),
            policy.currency,
            meal_allowance.normalize()
        ),
    }
}
