//! Bulk import of scraped attendance records.
//!
//! Records arrive as the JSON array produced by the attendance-site scraper:
//! `[{"date": "2025-01-06", "clockIn": "08:02", "clockOut": "18:15"}, ...]`.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculation::classify;
use crate::error::EngineResult;
use crate::models::{ClockTime, EntryDraft, PublicHolidayOption};

use super::key_value::KeyValueStore;
use super::ledger::EntryLedger;

/// One scraped attendance row.
///
/// Every field is optional on the wire; rows without a date and both clock
/// times are ignored by the import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Calendar date of the shift.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Clock-in time.
    #[serde(default)]
    pub clock_in: Option<ClockTime>,
    /// Clock-out time.
    #[serde(default)]
    pub clock_out: Option<ClockTime>,
    /// Whether the date is a public holiday.
    #[serde(default)]
    pub is_public_holiday: bool,
}

/// Outcome of an attendance import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Number of entries added.
    pub imported: usize,
    /// Dates skipped because an entry already existed for them.
    pub duplicates: Vec<NaiveDate>,
}

impl<S: KeyValueStore> EntryLedger<S> {
    /// Imports scraped attendance records.
    ///
    /// A record is skipped as a duplicate when an entry for its date existed
    /// before the import began; records within one batch are not checked
    /// against each other. Imported entries use [`PublicHolidayOption::Pay`].
    /// Nothing is written when no record is imported.
    ///
    /// # Example
    ///
    /// ```
    /// use overtime_engine::config::PolicyConfig;
    /// use overtime_engine::store::{AttendanceRecord, EntryLedger, InMemoryStore};
    ///
    /// let ledger = EntryLedger::new(InMemoryStore::default(), PolicyConfig::default());
    /// let records: Vec<AttendanceRecord> = serde_json::from_str(
    ///     r#"[{"date": "2025-01-06", "clockIn": "08:00", "clockOut": "18:00"}]"#,
    /// )
    /// .unwrap();
    ///
    /// let report = ledger.import_attendance(records).unwrap();
    /// assert_eq!(report.imported, 1);
    /// assert!(report.duplicates.is_empty());
    /// ```
    pub fn import_attendance(&self, records: Vec<AttendanceRecord>) -> EngineResult<ImportReport> {
        let _guard = self.lock()?;
        let mut entries = self.entries()?;
        let existing_dates: HashSet<NaiveDate> = entries.iter().map(|entry| entry.date).collect();

        let mut report = ImportReport::default();
        let mut skipped = 0usize;

        for record in records {
            let (Some(date), Some(clock_in), Some(clock_out)) =
                (record.date, record.clock_in, record.clock_out)
            else {
                skipped += 1;
                continue;
            };

            if existing_dates.contains(&date) {
                report.duplicates.push(date);
                continue;
            }

            let mut entry = EntryDraft {
                date,
                clock_in: Some(clock_in),
                clock_out: Some(clock_out),
                is_public_holiday: record.is_public_holiday,
                public_holiday_option: PublicHolidayOption::Pay,
            }
            .into_entry();

            match classify(&entry, self.policy()) {
                Some(result) => {
                    entry.result = Some(result);
                    entries.push(entry);
                    report.imported += 1;
                }
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(skipped, "Ignored incomplete attendance records");
        }

        if report.imported > 0 {
            self.save(&entries)?;
        }

        info!(
            imported = report.imported,
            duplicates = report.duplicates.len(),
            "Imported attendance"
        );
        Ok(report)
    }
}
