//! Time entry model and related types.
//!
//! This module defines the [`TimeEntry`] struct for one day's clock-in and
//! clock-out, the [`ClockTime`] wall-clock value, and the public holiday
//! compensation option.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::OvertimeResult;

/// Minutes in one day, used to wrap clock arithmetic.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time of day with minute precision (24h).
///
/// Parses from `HH:MM` or `H:MM` and always formats zero-padded.
///
/// # Example
///
/// ```
/// use overtime_engine::models::ClockTime;
///
/// let time: ClockTime = "8:05".parse().unwrap();
/// assert_eq!(time.to_string(), "08:05");
/// assert_eq!(time.minutes_of_day(), 485);
/// assert!("24:00".parse::<ClockTime>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u32,
}

impl ClockTime {
    /// Creates a clock time from an hour (0-23) and minute (0-59).
    pub fn new(hour: u32, minute: u32) -> EngineResult<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(EngineError::InvalidTime {
                value: format!("{}:{:02}", hour, minute),
            });
        }
        Ok(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Creates a clock time from minutes past midnight, wrapping modulo 24h.
    pub fn from_minutes_wrapping(minutes: u32) -> Self {
        Self {
            minutes: minutes % MINUTES_PER_DAY,
        }
    }

    /// The hour component (0-23).
    pub fn hour(&self) -> u32 {
        self.minutes / 60
    }

    /// The minute component (0-59).
    pub fn minute(&self) -> u32 {
        self.minutes % 60
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_of_day(&self) -> u32 {
        self.minutes
    }

    /// Returns this time shifted forward by `minutes`, wrapping past midnight.
    pub fn add_minutes_wrapping(&self, minutes: u32) -> Self {
        Self::from_minutes_wrapping(self.minutes + minutes % MINUTES_PER_DAY)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidTime {
            value: s.to_string(),
        };

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let well_formed = (1..=2).contains(&hour.len())
            && minute.len() == 2
            && hour.chars().all(|c| c.is_ascii_digit())
            && minute.chars().all(|c| c.is_ascii_digit());
        if !well_formed {
            return Err(invalid());
        }

        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// Parses an ISO `YYYY-MM-DD` calendar date.
///
/// # Example
///
/// ```
/// use overtime_engine::models::parse_date;
///
/// assert_eq!(parse_date("2025-01-06").unwrap().to_string(), "2025-01-06");
/// assert!(parse_date("2025-02-30").is_err());
/// ```
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}

/// How work on a public holiday is compensated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicHolidayOption {
    /// Paid at the weekend/holiday hourly rate.
    #[default]
    Pay,
    /// Converted to replacement leave, with excess hours paid.
    Leave,
}

/// A day's entry as submitted by the host, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    /// The calendar date of the shift start.
    pub date: NaiveDate,
    /// Clock-in time, if recorded.
    #[serde(default)]
    pub clock_in: Option<ClockTime>,
    /// Clock-out time, if recorded.
    #[serde(default)]
    pub clock_out: Option<ClockTime>,
    /// Whether the date is a public holiday.
    #[serde(default)]
    pub is_public_holiday: bool,
    /// Compensation option for public holiday work.
    #[serde(default)]
    pub public_holiday_option: PublicHolidayOption,
}

impl EntryDraft {
    /// Assigns a fresh id, producing an unclassified [`TimeEntry`].
    pub fn into_entry(self) -> TimeEntry {
        TimeEntry {
            id: Uuid::new_v4(),
            date: self.date,
            clock_in: self.clock_in,
            clock_out: self.clock_out,
            is_public_holiday: self.is_public_holiday,
            public_holiday_option: self.public_holiday_option,
            result: None,
        }
    }
}

/// One day's clock-in/clock-out record.
///
/// # Example
///
/// ```
/// use overtime_engine::models::{ClockTime, TimeEntry};
/// use chrono::NaiveDate;
///
/// let entry = TimeEntry::new(
///     NaiveDate::from_ymd_opt(2025, 1, 4).unwrap(), // Saturday
///     "09:00".parse::<ClockTime>().ok(),
///     "17:10".parse::<ClockTime>().ok(),
/// );
/// assert!(entry.is_weekend());
/// assert!(entry.result.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier assigned at creation, never reused.
    pub id: Uuid,
    /// The calendar date of the shift start.
    pub date: NaiveDate,
    /// Clock-in time, if recorded.
    #[serde(default)]
    pub clock_in: Option<ClockTime>,
    /// Clock-out time, if recorded.
    #[serde(default)]
    pub clock_out: Option<ClockTime>,
    /// Whether the date is a public holiday.
    #[serde(default)]
    pub is_public_holiday: bool,
    /// Compensation option for public holiday work.
    #[serde(default)]
    pub public_holiday_option: PublicHolidayOption,
    /// The classification result, once computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<OvertimeResult>,
}

impl TimeEntry {
    /// Creates an unclassified, non-holiday entry with a fresh id.
    pub fn new(date: NaiveDate, clock_in: Option<ClockTime>, clock_out: Option<ClockTime>) -> Self {
        EntryDraft {
            date,
            clock_in,
            clock_out,
            is_public_holiday: false,
            public_holiday_option: PublicHolidayOption::Pay,
        }
        .into_entry()
    }

    /// Marks the entry as a public holiday with the given compensation option.
    pub fn with_public_holiday(mut self, option: PublicHolidayOption) -> Self {
        self.is_public_holiday = true;
        self.public_holiday_option = option;
        self
    }

    /// Returns true if the entry's date falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
