//! Entry persistence.
//!
//! The [`EntryLedger`] keeps every classified entry as a single JSON document
//! in an opaque [`KeyValueStore`], and bulk-imports scraped attendance.

mod import;
mod key_value;
mod ledger;

pub use import::{AttendanceRecord, ImportReport};
pub use key_value::{InMemoryStore, KeyValueStore};
pub use ledger::{ENTRIES_KEY, EntryLedger};
