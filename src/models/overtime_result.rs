//! Overtime result models.
//!
//! This module contains the [`OvertimeResult`] attached to a classified
//! [`TimeEntry`](super::TimeEntry) and the [`OvertimeType`] category.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The pay category a day's work falls into.
///
/// # Example
///
/// ```
/// use overtime_engine::models::OvertimeType;
///
/// assert_eq!(OvertimeType::PublicHolidayLeave.label(), "Public Holiday (Leave)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeType {
    /// Weekday shift with no claimable overtime.
    NoOt,
    /// Weekday overtime beyond the standard day and break.
    Weekday,
    /// Saturday or Sunday work, all hours count as overtime.
    Weekend,
    /// Public holiday work paid at the holiday rate.
    PublicHoliday,
    /// Public holiday work converted to replacement leave.
    PublicHolidayLeave,
}

impl OvertimeType {
    /// The display label used in breakdowns and exports.
    pub fn label(&self) -> &'static str {
        match self {
            OvertimeType::NoOt => "No OT",
            OvertimeType::Weekday => "Weekday",
            OvertimeType::Weekend => "Weekend",
            OvertimeType::PublicHoliday => "Public Holiday",
            OvertimeType::PublicHolidayLeave => "Public Holiday (Leave)",
        }
    }
}

impl fmt::Display for OvertimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The classification of a single day's worked interval.
///
/// Components that do not apply to the type are zero, so
/// `total_pay == meal_allowance + ot_pay + excess_pay` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeResult {
    /// The pay category.
    #[serde(rename = "type")]
    pub overtime_type: OvertimeType,
    /// Decimal hours counted as overtime (zero for `NoOt`).
    pub hours: Decimal,
    /// Hours converted to replacement leave, only for `PublicHolidayLeave`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_hours: Option<Decimal>,
    /// Flat meal allowance.
    pub meal_allowance: Decimal,
    /// Overtime hours paid at the applicable hourly rate.
    pub ot_pay: Decimal,
    /// Holiday hours beyond the leave cap, paid at the holiday rate.
    pub excess_pay: Decimal,
    /// Total payable for the day.
    pub total_pay: Decimal,
    /// Human-readable description of the computation.
    pub breakdown: String,
}

impl OvertimeResult {
    /// A zero-valued `NoOt` result with the given reason.
    pub fn no_overtime(reason: impl Into<String>) -> Self {
        Self {
            overtime_type: OvertimeType::NoOt,
            hours: Decimal::ZERO,
            leave_hours: None,
            meal_allowance: Decimal::ZERO,
            ot_pay: Decimal::ZERO,
            excess_pay: Decimal::ZERO,
            total_pay: Decimal::ZERO,
            breakdown: reason.into(),
        }
    }

    /// Sum of the individual pay components.
    pub fn components_total(&self) -> Decimal {
        self.meal_allowance + self.ot_pay + self.excess_pay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overtime_is_zero_valued() {
        let result = OvertimeResult::no_overtime("Less than 8.5 hours");
        assert_eq!(result.overtime_type, OvertimeType::NoOt);
        assert_eq!(result.hours, Decimal::ZERO);
        assert_eq!(result.total_pay, Decimal::ZERO);
        assert_eq!(result.components_total(), result.total_pay);
        assert_eq!(result.breakdown, "Less than 8.5 hours");
    }

    #[test]
    fn test_overtime_type_serialization() {
        assert_eq!(serde_json::to_string(&OvertimeType::NoOt).unwrap(), "\"no_ot\"");
        assert_eq!(
            serde_json::to_string(&OvertimeType::PublicHolidayLeave).unwrap(),
            "\"public_holiday_leave\""
        );

        let parsed: OvertimeType = serde_json::from_str("\"weekend\"").unwrap();
        assert_eq!(parsed, OvertimeType::Weekend);
    }

    #[test]
    fn test_overtime_type_labels() {
        assert_eq!(OvertimeType::NoOt.to_string(), "No OT");
        assert_eq!(OvertimeType::Weekday.to_string(), "Weekday");
        assert_eq!(OvertimeType::Weekend.to_string(), "Weekend");
        assert_eq!(OvertimeType::PublicHoliday.to_string(), "Public Holiday");
    }

    #[test]
    fn test_result_serialization_omits_absent_leave_hours() {
        let result = OvertimeResult::no_overtime("Less than 9 hours");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"type\":\"no_ot\""));
        assert!(json.contains("\"total_pay\":\"0\""));
        assert!(!json.contains("leave_hours"));
    }

    #[test]
    fn test_result_deserialization() {
        let json = r#"{
            "type": "public_holiday_leave",
            "hours": "10",
            "leave_hours": "8",
            "meal_allowance": "13",
            "ot_pay": "0",
            "excess_pay": "40",
            "total_pay": "53",
            "breakdown": "8.00 hours leave"
        }"#;
        let result: OvertimeResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.overtime_type, OvertimeType::PublicHolidayLeave);
        assert_eq!(result.leave_hours, Some(Decimal::from(8)));
        assert_eq!(result.components_total(), result.total_pay);
    }
}
