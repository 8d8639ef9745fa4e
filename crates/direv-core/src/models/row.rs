//! Output row models for the mail-merge export.

use serde::{Deserialize, Serialize};

use crate::reference::ReferenceRecord;
use crate::revision::rules::stamp::StampComparison;

/// Column headers of the mail-merge export, in fixed order.
///
/// Order and names match the downstream template exactly; serialization
/// must write these positionally (the `No Surat`/`Tgl Surat` columns stay
/// empty for manual completion).
pub const MERGE_HEADERS: [&str; 14] = [
    "No",
    "Kode Satker",
    "Revisi Ke",
    "Nama Satker",
    "DS berubah atau tidak",
    "DS RAW",
    "Kode DS",
    "KPPN",
    "No Surat",
    "Tgl Surat",
    "Pejabat",
    "Tembusan KL",
    "ref",
    "DS ND pengantar",
];

/// Fields extracted from one document's text.
///
/// Every field is optional: each pattern search is independent and a miss
/// leaves the field absent, never malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// 6-digit satker code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satker_code: Option<String>,

    /// Revision number (digits after "REVISI KE :").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,

    /// Digital stamp before the revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stamp_before: Option<String>,

    /// Digital stamp after the revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stamp_after: Option<String>,

    /// Satker name taken from the line containing the code.
    /// Heuristic; consulted only when no reference table is loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satker_name: Option<String>,
}

/// One row of the mail-merge export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRow {
    /// 1-based sequence number, assigned in input order.
    pub sequence: usize,

    /// 6-digit satker code ("Kode Satker").
    pub satker_code: String,

    /// Revision number ("Revisi Ke").
    pub revision: String,

    /// Satker name ("Nama Satker").
    pub satker_name: String,

    /// Stamp status label ("DS berubah atau tidak").
    pub ds_status: String,

    /// Raw stamp-after value ("DS RAW").
    pub ds_raw: String,

    /// Formatted stamp code ("Kode DS").
    pub ds_code: String,

    /// KPPN code from the reference table.
    pub kppn: String,

    /// Letter number ("No Surat"), reserved for manual completion.
    pub letter_number: String,

    /// Letter date ("Tgl Surat"), reserved for manual completion.
    pub letter_date: String,

    /// Official title from the reference table ("Pejabat").
    pub official_title: String,

    /// Copy recipient from the reference table ("Tembusan KL").
    pub copy_recipient: String,

    /// Reference value from the reference table ("ref").
    pub ref_value: String,

    /// Short-form unchanged marker ("DS ND pengantar"): "tidak" when the
    /// stamp did not change, empty otherwise.
    pub nd_marker: String,
}

impl MergeRow {
    /// Compose a row from the pipeline stage outputs (pure field placement).
    ///
    /// `Nama Satker` comes from the reference record when the join resolved.
    /// The parser's heuristic name is used only when no table was loaded at
    /// all; a loaded-but-unmatched join leaves the name empty.
    pub fn compose(
        sequence: usize,
        fields: &ExtractedFields,
        stamp: &StampComparison,
        reference: Option<&ReferenceRecord>,
        table_loaded: bool,
    ) -> Self {
        let satker_name = match reference {
            Some(record) => record.satker_name.clone(),
            None if !table_loaded => fields.satker_name.clone().unwrap_or_default(),
            None => String::new(),
        };

        Self {
            sequence,
            satker_code: fields.satker_code.clone().unwrap_or_default(),
            revision: fields.revision.clone().unwrap_or_default(),
            satker_name,
            ds_status: stamp.status.label().to_string(),
            ds_raw: fields.stamp_after.clone().unwrap_or_default(),
            ds_code: stamp.formatted_code.clone(),
            kppn: reference.map(|r| r.kppn_code.clone()).unwrap_or_default(),
            letter_number: String::new(),
            letter_date: String::new(),
            official_title: reference
                .map(|r| r.official_title.clone())
                .unwrap_or_default(),
            copy_recipient: reference
                .map(|r| r.copy_recipient.clone())
                .unwrap_or_default(),
            ref_value: reference.map(|r| r.ref_value.clone()).unwrap_or_default(),
            nd_marker: stamp.status.nd_marker().to_string(),
        }
    }

    /// The row's cells in `MERGE_HEADERS` order, for positional writing.
    pub fn to_record(&self) -> [String; 14] {
        [
            self.sequence.to_string(),
            self.satker_code.clone(),
            self.revision.clone(),
            self.satker_name.clone(),
            self.ds_status.clone(),
            self.ds_raw.clone(),
            self.ds_code.clone(),
            self.kppn.clone(),
            self.letter_number.clone(),
            self.letter_date.clone(),
            self.official_title.clone(),
            self.copy_recipient.clone(),
            self.ref_value.clone(),
            self.nd_marker.clone(),
        ]
    }
}
