//! Core library for DIPA budget-revision data extraction.
//!
//! This crate provides:
//! - PDF text extraction (per-page text via lopdf and pdf-extract)
//! - Rule-based field extraction (satker code, revision number, digital stamps)
//! - Digital stamp comparison and code formatting
//! - Reference-table enrichment keyed by satker code
//! - Mail-merge row assembly with the fixed export schema

pub mod error;
pub mod models;
pub mod pdf;
pub mod reference;
pub mod revision;

pub use error::{DirevError, Result};
pub use models::config::DirevConfig;
pub use models::row::{ExtractedFields, MergeRow, MERGE_HEADERS};
pub use pdf::{concat_page_texts, PdfExtractor, PdfProcessor};
pub use reference::{ReferenceRecord, ReferenceTable};
pub use revision::{ExtractionResult, ProcessedDocument, RevisionParser, RevisionPipeline};
pub use revision::rules::stamp::{StampComparison, StampStatus};
