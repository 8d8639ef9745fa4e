//! Data models for configuration and output rows.

pub mod config;
pub mod row;

pub use config::{DirevConfig, ExtractionConfig, PdfConfig};
pub use row::{ExtractedFields, MergeRow, MERGE_HEADERS};
