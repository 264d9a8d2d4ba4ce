//! The persisted collection of classified entries.

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{classify, summarize};
use crate::config::PolicyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{EntryDraft, PayslipMonth, PayslipPeriod, TimeEntry};

use super::key_value::KeyValueStore;

/// Store key holding the JSON array of entries.
pub const ENTRIES_KEY: &str = "ot-entries";

/// Entries persisted as one JSON document in a [`KeyValueStore`].
///
/// Every mutation is a load-modify-save cycle. Cycles are serialized through
/// an internal lock so concurrent callers never lose each other's writes.
///
/// # Example
///
/// ```
/// use overtime_engine::config::PolicyConfig;
/// use overtime_engine::models::EntryDraft;
/// use overtime_engine::store::{EntryLedger, InMemoryStore};
/// use chrono::NaiveDate;
///
/// let ledger = EntryLedger::new(InMemoryStore::default(), PolicyConfig::default());
/// let entry = ledger
///     .add_entry(EntryDraft {
///         date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///         clock_in: "08:00".parse().ok(),
///         clock_out: "18:00".parse().ok(),
///         is_public_holiday: false,
///         public_holiday_option: Default::default(),
///     })
///     .unwrap();
///
/// assert!(entry.result.is_some());
/// assert_eq!(ledger.entries().unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct EntryLedger<S> {
    store: S,
    policy: PolicyConfig,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> EntryLedger<S> {
    /// Creates a ledger over `store`, classifying with `policy`.
    pub fn new(store: S, policy: PolicyConfig) -> Self {
        Self {
            store,
            policy,
            write_lock: Mutex::new(()),
        }
    }

    /// The policy entries are classified with.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads all stored entries. A missing key yields an empty list.
    pub fn entries(&self) -> EngineResult<Vec<TimeEntry>> {
        match self.store.get(ENTRIES_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Classifies `draft`, assigns it a fresh id and appends it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IncompleteEntry`] if either clock time is missing.
    pub fn add_entry(&self, draft: EntryDraft) -> EngineResult<TimeEntry> {
        let mut entry = draft.into_entry();
        let result = classify(&entry, &self.policy).ok_or_else(|| EngineError::IncompleteEntry {
            date: entry.date.to_string(),
        })?;
        let total_pay = result.total_pay;
        entry.result = Some(result);

        let _guard = self.lock()?;
        let mut entries = self.entries()?;
        entries.push(entry.clone());
        self.save(&entries)?;

        info!(
            entry_id = %entry.id,
            date = %entry.date,
            total_pay = %total_pay,
            "Added entry"
        );
        Ok(entry)
    }

    /// Removes the entry with `id`, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EntryNotFound`] if no entry has that id.
    pub fn delete_entry(&self, id: Uuid) -> EngineResult<TimeEntry> {
        let _guard = self.lock()?;
        let mut entries = self.entries()?;
        let position = entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(EngineError::EntryNotFound { id })?;
        let removed = entries.remove(position);
        self.save(&entries)?;

        info!(entry_id = %id, date = %removed.date, "Deleted entry");
        Ok(removed)
    }

    /// Deletes every entry, returning how many were removed.
    pub fn clear(&self) -> EngineResult<usize> {
        let _guard = self.lock()?;
        let count = self.entries()?.len();
        self.store.delete(ENTRIES_KEY)?;

        info!(count, "Cleared entries");
        Ok(count)
    }

    /// Summarizes the stored entries over the payslip period for `month`.
    pub fn summarize(&self, month: PayslipMonth) -> EngineResult<PayslipPeriod> {
        let entries = self.entries()?;
        Ok(summarize(&entries, month, &self.policy))
    }

    pub(super) fn lock(&self) -> EngineResult<MutexGuard<'_, ()>> {
        self.write_lock.lock().map_err(|_| EngineError::StorageError {
            message: "entry ledger lock poisoned".to_string(),
        })
    }

    pub(super) fn save(&self, entries: &[TimeEntry]) -> EngineResult<()> {
        let json = serde_json::to_string(entries)?;
        self.store.set(ENTRIES_KEY, json)?;
        debug!(count = entries.len(), "Saved entries");
        Ok(())
    }
}
