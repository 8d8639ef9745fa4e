//! Rule-based field extractors for DIPA revision documents.

pub mod patterns;
pub mod satker;
pub mod stamp;

pub use satker::{extract_satker_code, extract_satker_name, title_case, SatkerExtractor};
pub use stamp::{
    compare_stamps, extract_stamp_after, extract_stamp_before, format_stamp_code,
    StampComparison, StampStatus,
};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text (first match).
    fn extract(&self, text: &str) -> Option<Self::Output>;
}
