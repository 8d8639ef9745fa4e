//! Rule-based parser for DIPA revision documents.

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::row::ExtractedFields;

use super::rules::{
    compare_stamps, extract_satker_code, extract_satker_name, extract_stamp_after,
    extract_stamp_before, patterns::REVISI_KE, StampComparison,
};

/// Result of parsing one document's text.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted fields.
    pub fields: ExtractedFields,
    /// Stamp comparison derived from the extracted stamps.
    pub stamp: StampComparison,
    /// Extraction warnings (one per missed field).
    pub warnings: Vec<String>,
}

/// Rule-based field parser.
///
/// Every pattern search is independent and best-effort: a miss yields an
/// absent field and a warning, never an error.
pub struct RevisionParser {
    /// Extract the fallback satker name from the code's line.
    name_from_text: bool,
    /// Title-case the fallback name.
    title_case_names: bool,
}

impl RevisionParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            name_from_text: true,
            title_case_names: true,
        }
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            name_from_text: config.name_from_text,
            title_case_names: config.title_case_names,
        }
    }

    /// Set whether to extract the fallback name from text.
    pub fn with_name_from_text(mut self, enable: bool) -> Self {
        self.name_from_text = enable;
        self
    }

    /// Set whether to title-case the fallback name.
    pub fn with_title_case_names(mut self, enable: bool) -> Self {
        self.title_case_names = enable;
        self
    }

    /// Parse one document's concatenated text.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        let mut warnings = Vec::new();

        info!("Parsing revision document from {} characters of text", text.len());

        let satker_code = extract_satker_code(text);
        if satker_code.is_none() {
            warnings.push("Could not extract satker code".to_string());
        }

        let satker_name = match (&satker_code, self.name_from_text) {
            (Some(code), true) => extract_satker_name(text, code, self.title_case_names),
            _ => None,
        };

        let revision = REVISI_KE.captures(text).map(|caps| caps[1].to_string());
        if revision.is_none() {
            warnings.push("Could not extract revision number".to_string());
        }

        let stamp_before = extract_stamp_before(text);
        if stamp_before.is_none() {
            warnings.push("Could not extract digital stamp before".to_string());
        }

        let stamp_after = extract_stamp_after(text);
        if stamp_after.is_none() {
            warnings.push("Could not extract digital stamp after".to_string());
        }

        let stamp = compare_stamps(stamp_before.as_deref(), stamp_after.as_deref());

        let fields = ExtractedFields {
            satker_code,
            revision,
            stamp_before,
            stamp_after,
            satker_name,
        };

        debug!(
            "Extracted satker {:?}, revision {:?}, stamp status {:?}",
            fields.satker_code, fields.revision, stamp.status
        );

        ExtractionResult {
            fields,
            stamp,
            warnings,
        }
    }
}

impl Default for RevisionParser {
    fn default() -> Self {
        Self::new()
    }
}
