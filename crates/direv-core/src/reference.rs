//! Reference-table lookup keyed by satker code.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One row of the reference table.
///
/// Loaded once before any documents are processed, read-only thereafter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// Satker code the row is keyed by. Leading zeros are significant.
    pub satker_code: String,

    /// Satker name.
    pub satker_name: String,

    /// KPPN code.
    pub kppn_code: String,

    /// Official title ("Pejabat").
    pub official_title: String,

    /// Copy recipient ("Tembusan KL").
    pub copy_recipient: String,

    /// Reference value ("ref").
    pub ref_value: String,
}

/// An ordered, immutable reference table.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    records: Vec<ReferenceRecord>,
}

impl ReferenceTable {
    /// Build a table from rows, preserving their order.
    pub fn from_records(records: Vec<ReferenceRecord>) -> Self {
        Self { records }
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find the row whose normalized key equals `satker_code` exactly.
    ///
    /// Keys are compared as strings; no numeric coercion, so leading zeros
    /// matter. With duplicate keys the first row in table order wins and
    /// later duplicates are silently ignored. No match is not an error.
    pub fn lookup(&self, satker_code: &str) -> Option<&ReferenceRecord> {
        let found = self
            .records
            .iter()
            .find(|record| normalize_key(&record.satker_code) == satker_code);
        if found.is_none() {
            debug!("No reference row for satker code {}", satker_code);
        }
        found
    }
}

/// Normalize a reference-table key: trim, then discard everything from the
/// first `.` onward. Repairs numeric-looking codes that gained a spurious
/// fractional suffix (e.g. "123456.0") on load.
pub fn normalize_key(key: &str) -> &str {
    let key = key.trim();
    match key.find('.') {
        Some(pos) => &key[..pos],
        None => key,
    }
}
