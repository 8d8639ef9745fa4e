//! PDF processing module.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;

    /// Extract text from a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;

    /// Extract per-page texts; pages with no extractable text yield `None`.
    fn extract_pages(&self) -> Result<Vec<Option<String>>>;
}

/// Concatenate page texts into a single blob.
///
/// Each non-empty page's text is followed by a newline; absent and empty
/// pages contribute nothing. All-absent input yields an empty string,
/// which downstream treats as "no fields extractable".
pub fn concat_page_texts(pages: &[Option<String>]) -> String {
    let mut text = String::new();
    for page in pages.iter().flatten() {
        if !page.is_empty() {
            text.push_str(page);
            text.push('\n');
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_concat_skips_absent_and_empty_pages() {
        let pages = vec![
            Some("page one".to_string()),
            None,
            Some(String::new()),
            Some("page two".to_string()),
        ];
        assert_eq!(concat_page_texts(&pages), "page one\npage two\n");
    }

    #[test]
    fn test_concat_all_absent_yields_empty() {
        let pages = vec![None, None];
        assert_eq!(concat_page_texts(&pages), "");
        assert_eq!(concat_page_texts(&[]), "");
    }
}
