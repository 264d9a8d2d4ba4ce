//! Request types for the Overtime Engine API.
//!
//! This module defines the JSON request structures for the `/classify`,
//! `/summarize` and `/entries` endpoints.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{ClockTime, EntryDraft, PayslipMonth, PublicHolidayOption, TimeEntry, parse_date};

/// Request body for `/classify` and `POST /entries`.
///
/// Clock times may be omitted; a classification request with a missing time
/// returns no result, while creating an entry requires both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRequest {
    /// The calendar date of the shift start (`YYYY-MM-DD`).
    pub date: String,
    /// Clock-in time (`HH:MM`).
    #[serde(default)]
    pub clock_in: Option<ClockTime>,
    /// Clock-out time (`HH:MM`).
    #[serde(default)]
    pub clock_out: Option<ClockTime>,
    /// Whether the date is a public holiday.
    #[serde(default)]
    pub is_public_holiday: bool,
    /// Compensation option for public holiday work.
    #[serde(default)]
    pub public_holiday_option: PublicHolidayOption,
}

impl TryFrom<EntryRequest> for EntryDraft {
    type Error = EngineError;

    fn try_from(req: EntryRequest) -> Result<Self, Self::Error> {
        Ok(EntryDraft {
            date: parse_date(&req.date)?,
            clock_in: req.clock_in,
            clock_out: req.clock_out,
            is_public_holiday: req.is_public_holiday,
            public_holiday_option: req.public_holiday_option,
        })
    }
}

/// Request body for the `/summarize` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Classified entries to aggregate.
    pub entries: Vec<TimeEntry>,
    /// The selected month (`YYYY-MM`).
    pub month: PayslipMonth,
}
