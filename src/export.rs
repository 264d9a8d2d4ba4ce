//! CSV export of a payslip period.
//!
//! Columns: `Date,Day,Clock In,Clock Out,Type,Hours,Pay`.

use std::io::Write;

use csv::WriterBuilder;
use serde::Serialize;

use crate::calculation::{payslip_window, two_places};
use crate::config::PolicyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayslipMonth, TimeEntry};

const HEADER: [&str; 7] = ["Date", "Day", "Clock In", "Clock Out", "Type", "Hours", "Pay"];

#[derive(Serialize)]
struct PeriodRow<'a> {
    date: String,
    day: String,
    clock_in: String,
    clock_out: String,
    overtime_type: &'a str,
    hours: String,
    pay: String,
}

/// Download file name for the period export, e.g. `Payslip-Period-2025-01.csv`.
pub fn file_name(month: PayslipMonth) -> String {
    format!("Payslip-Period-{}.csv", month)
}

/// Writes the classified entries of the payslip period for `month` as CSV.
///
/// Entries are written in the given order. Entries without a result are
/// skipped.
pub fn write_period_csv<W: Write>(
    writer: W,
    entries: &[TimeEntry],
    month: PayslipMonth,
    policy: &PolicyConfig,
) -> EngineResult<()> {
    let (start, end) = payslip_window(month, &policy.payslip_period);
    let mut wrt = WriterBuilder::new().has_headers(false).from_writer(writer);
    wrt.write_record(HEADER)?;

    for entry in entries.iter().filter(|e| e.date >= start && e.date <= end) {
        let Some(result) = entry.result.as_ref() else {
            continue;
        };
        let row = PeriodRow {
            date: entry.date.format("%Y-%m-%d").to_string(),
            day: entry.date.format("%a").to_string(),
            clock_in: entry.clock_in.map(|t| t.to_string()).unwrap_or_default(),
            clock_out: entry.clock_out.map(|t| t.to_string()).unwrap_or_default(),
            overtime_type: result.overtime_type.label(),
            hours: two_places(result.hours),
            pay: two_places(result.total_pay),
        };
        wrt.serialize(row)?;
    }

    wrt.flush().map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })
}

/// Renders the payslip period for `month` as a CSV string.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::classify_entry;
/// use overtime_engine::config::PolicyConfig;
/// use overtime_engine::export::export_period_csv;
/// use overtime_engine::models::TimeEntry;
/// use chrono::NaiveDate;
///
/// let policy = PolicyConfig::default();
/// let entry = TimeEntry::new(
///     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     "08:00".parse().ok(),
///     "18:00".parse().ok(),
/// );
/// let entries = vec![classify_entry(&entry, &policy)];
///
/// let csv = export_period_csv(&entries, "2025-01".parse().unwrap(), &policy).unwrap();
/// assert_eq!(
///     csv,
///     "Date,Day,Clock In,Clock Out,Type,Hours,Pay\n2025-01-06,Mon,08:00,18:00,Weekday,1.00,26.00\n"
/// );
/// ```
pub fn export_period_csv(
    entries: &[TimeEntry],
    month: PayslipMonth,
    policy: &PolicyConfig,
) -> EngineResult<String> {
    let mut buffer = Vec::new();
    write_period_csv(&mut buffer, entries, month, policy)?;
    String::from_utf8(buffer).map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::classify_entry;
    use crate::models::PublicHolidayOption;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn classified(date: &str, clock_in: &str, clock_out: &str) -> TimeEntry {
        let entry = TimeEntry::new(make_date(date), clock_in.parse().ok(), clock_out.parse().ok());
        classify_entry(&entry, &PolicyConfig::default())
    }

    fn month(s: &str) -> PayslipMonth {
        s.parse().unwrap()
    }

    /// EX-001: rows carry label, two-place hours and pay
    #[test]
    fn test_ex_001_rows() {
        let entries = vec![
            classified("2025-01-04", "09:00", "17:10"),
            classified("2025-01-07", "08:00", "17:00"),
        ];

        let csv = export_period_csv(&entries, month("2025-01"), &PolicyConfig::default()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Date,Day,Clock In,Clock Out,Type,Hours,Pay");
        assert_eq!(lines[1], "2025-01-04,Sat,09:00,17:10,Weekend,8.17,176.33");
        assert_eq!(lines[2], "2025-01-07,Tue,08:00,17:00,No OT,0.00,0.00");
        assert_eq!(lines.len(), 3);
    }

    /// EX-002: only entries inside the window are exported
    #[test]
    fn test_ex_002_window_filter() {
        let entries = vec![
            classified("2024-12-28", "08:00", "18:00"),
            classified("2024-12-30", "08:00", "18:00"),
            classified("2025-01-29", "08:00", "18:00"),
        ];

        let csv = export_period_csv(&entries, month("2025-01"), &PolicyConfig::default()).unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("2024-12-30"));
    }

    /// EX-003: empty period exports just the header
    #[test]
    fn test_ex_003_empty_period() {
        let csv = export_period_csv(&[], month("2025-01"), &PolicyConfig::default()).unwrap();
        assert_eq!(csv, "Date,Day,Clock In,Clock Out,Type,Hours,Pay\n");
    }

    #[test]
    fn test_leave_label() {
        let entry = TimeEntry::new(make_date("2025-01-10"), "08:00".parse().ok(), "18:00".parse().ok())
            .with_public_holiday(PublicHolidayOption::Leave);
        let entries = vec![classify_entry(&entry, &PolicyConfig::default())];

        let csv = export_period_csv(&entries, month("2025-01"), &PolicyConfig::default()).unwrap();
        assert!(csv.contains("Public Holiday (Leave),10.00,53.00"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(month("2025-01")), "Payslip-Period-2025-01.csv");
    }
}
