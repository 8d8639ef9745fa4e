//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// PDF text extractor using lopdf for structure and pdf-extract for text.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        // pdf-extract gives whole-document text only; partition lines evenly
        // across pages, with the remainder going to the last page.
        let page_count = self.page_count();
        if page_count == 0 {
            return Ok(String::new());
        }
        if page == 0 || page > page_count {
            return Err(PdfError::InvalidPage(page));
        }

        let full_text = self.extract_text()?;
        let lines: Vec<&str> = full_text.lines().collect();
        let lines_per_page = lines.len() / page_count as usize;

        let start = ((page - 1) as usize) * lines_per_page;
        let end = if page == page_count {
            lines.len()
        } else {
            (page as usize) * lines_per_page
        };

        Ok(lines[start.min(lines.len())..end.min(lines.len())].join("\n"))
    }

    fn extract_pages(&self) -> Result<Vec<Option<String>>> {
        let page_count = self.page_count();
        let mut pages = Vec::with_capacity(page_count as usize);

        for page in 1..=page_count {
            let text = self.extract_page_text(page)?;
            if text.trim().is_empty() {
                pages.push(None);
            } else {
                pages.push(Some(text));
            }
        }

        debug!(
            "Extracted {} pages ({} with text)",
            pages.len(),
            pages.iter().filter(|p| p.is_some()).count()
        );
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut extractor = PdfExtractor::new();
        assert!(extractor.load(b"not a pdf").is_err());
    }

    #[test]
    fn test_extract_page_text_without_document() {
        let extractor = PdfExtractor::new();
        assert_eq!(extractor.extract_page_text(1).unwrap(), "");
    }
}
