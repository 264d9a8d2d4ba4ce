//! Day detection logic.
//!
//! This module determines the day type (weekday, weekend, public holiday)
//! that selects which overtime rule applies to an entry.

use serde::{Deserialize, Serialize};

use crate::models::TimeEntry;

/// Represents the type of day for overtime classification.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::DayType;
///
/// let day_type = DayType::Weekend;
/// assert_eq!(day_type.to_string(), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday, not a public holiday.
    Weekday,
    /// Saturday or Sunday, not a public holiday.
    Weekend,
    /// A public holiday, whatever the day of the week.
    PublicHoliday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
            DayType::PublicHoliday => write!(f, "Public Holiday"),
        }
    }
}

/// Determines the day type for an entry.
///
/// The public holiday flag takes precedence over the weekend check.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{get_day_type, DayType};
/// use overtime_engine::models::{PublicHolidayOption, TimeEntry};
/// use chrono::NaiveDate;
///
/// // 2025-01-04 is a Saturday
/// let saturday = TimeEntry::new(NaiveDate::from_ymd_opt(2025, 1, 4).unwrap(), None, None);
/// assert_eq!(get_day_type(&saturday), DayType::Weekend);
///
/// let holiday = saturday.with_public_holiday(PublicHolidayOption::Pay);
/// assert_eq!(get_day_type(&holiday), DayType::PublicHoliday);
/// ```
pub fn get_day_type(entry: &TimeEntry) -> DayType {
    if entry.is_public_holiday {
        DayType::PublicHoliday
    } else if entry.is_weekend() {
        DayType::Weekend
    } else {
        DayType::Weekday
    }
}
