//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the direv pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirevConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

impl Default for DirevConfig {
    fn default() -> Self {
        Self {
            pdf: PdfConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum extracted text length (after trimming) to treat a PDF as readable.
    pub min_text_length: usize,

    /// Maximum pages to process (0 = unlimited).
    pub max_pages: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            min_text_length: 50,
            max_pages: 0,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Extract the satker name from the line containing the satker code.
    /// Used only as a fallback when no reference table is loaded.
    pub name_from_text: bool,

    /// Title-case the extracted satker name.
    pub title_case_names: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_from_text: true,
            title_case_names: true,
        }
    }
}

impl DirevConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = DirevConfig::default();
        assert_eq!(config.pdf.min_text_length, 50);
        assert_eq!(config.pdf.max_pages, 0);
        assert!(config.extraction.name_from_text);
        assert!(config.extraction.title_case_names);
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: DirevConfig =
            serde_json::from_str(r#"{"pdf": {"min_text_length": 10}}"#).unwrap();
        assert_eq!(config.pdf.min_text_length, 10);
        assert_eq!(config.pdf.max_pages, 0);
        assert!(config.extraction.name_from_text);
    }
}
