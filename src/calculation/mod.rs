//! Calculation logic for the Overtime Engine.
//!
//! This module contains the day classifier (shift duration arithmetic, day
//! detection, weekday overtime thresholds, weekend and public holiday pay,
//! replacement leave and meal allowances), the clock-out previews and shift
//! countdown, and the payslip period aggregator.

mod classifier;
mod clock_preview;
mod day_detection;
mod meal_allowance;
mod period_aggregator;
mod public_holiday_leave;
mod shift_duration;
mod weekday_overtime;
mod weekend_overtime;

pub use classifier::{classify, classify_entry};
pub use clock_preview::{ShiftCountdown, minimum_clock_out_time, overtime_start_time, shift_countdown};
pub use day_detection::{DayType, get_day_type};
pub use meal_allowance::{weekday_meal_allowance, weekend_meal_allowance};
pub use period_aggregator::{payslip_window, summarize};
pub use public_holiday_leave::calculate_public_holiday_leave;
pub use shift_duration::{elapsed_minutes, minutes_to_hours};
pub(crate) use shift_duration::two_places;
pub use weekday_overtime::{WeekdayOvertimeDetection, calculate_weekday_overtime, detect_weekday_overtime};
pub use weekend_overtime::calculate_weekend_overtime;
