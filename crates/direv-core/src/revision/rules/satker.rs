//! Satker code and name extraction.

use super::patterns::SATKER_CODE;
use super::FieldExtractor;

/// Satker code extractor.
pub struct SatkerExtractor;

impl SatkerExtractor {
    /// Create a new satker extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SatkerExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for SatkerExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        SATKER_CODE.captures(text).map(|caps| caps[1].to_string())
    }
}

/// Extract the first standalone 6-digit satker code from text.
pub fn extract_satker_code(text: &str) -> Option<String> {
    SatkerExtractor::new().extract(text)
}

/// Extract the satker name from the first line containing `code`.
///
/// The name is the line with every occurrence of the code removed, trimmed.
/// Best-effort heuristic: used only as a fallback when no reference table
/// is available.
pub fn extract_satker_name(text: &str, code: &str, title_case_name: bool) -> Option<String> {
    let line = text.lines().find(|line| line.contains(code))?;
    let name = line.replace(code, "");
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    if title_case_name {
        Some(title_case(name))
    } else {
        Some(name.to_string())
    }
}

/// Title-case a string: a letter is uppercased when it follows a
/// non-letter, lowercased otherwise.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alphabetic = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}
