//! Revision-document field extraction and pipeline.

mod parser;
mod pipeline;
pub mod rules;

pub use parser::{ExtractionResult, RevisionParser};
pub use pipeline::{ProcessedDocument, RevisionPipeline};
