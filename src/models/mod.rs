//! Core data models for the Overtime Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod overtime_result;
mod payslip_period;
mod time_entry;

pub use overtime_result::{OvertimeResult, OvertimeType};
pub use payslip_period::{PayslipMonth, PayslipPeriod};
pub use time_entry::{ClockTime, EntryDraft, MINUTES_PER_DAY, PublicHolidayOption, TimeEntry, parse_date};
