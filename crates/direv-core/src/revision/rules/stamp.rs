//! Digital stamp extraction, comparison, and code formatting.

use serde::{Deserialize, Serialize};

use super::patterns::{DS_SEBELUM, DS_SESUDAH};

/// Status label emitted when the stamp did not change.
pub const LABEL_UNCHANGED: &str = "tidak berubah yaitu DS:";

/// Status label emitted when the stamp changed.
pub const LABEL_CHANGED: &str = "berubah yaitu DS:";

/// Marker value for the "DS ND pengantar" column when unchanged.
pub const ND_MARKER_UNCHANGED: &str = "tidak";

/// Outcome of comparing the stamp before and after a revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StampStatus {
    /// Both stamps present and equal.
    Unchanged,
    /// Both stamps present and different.
    Changed,
    /// At least one stamp absent.
    Unknown,
}

impl StampStatus {
    /// The literal status label for the "DS berubah atau tidak" column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unchanged => LABEL_UNCHANGED,
            Self::Changed => LABEL_CHANGED,
            Self::Unknown => "",
        }
    }

    /// The short-form marker for the "DS ND pengantar" column.
    pub fn nd_marker(&self) -> &'static str {
        match self {
            Self::Unchanged => ND_MARKER_UNCHANGED,
            _ => "",
        }
    }
}

/// Derived stamp status plus the formatted stamp code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampComparison {
    /// Comparison status.
    pub status: StampStatus,

    /// The stamp-after value grouped as 4-4-4-4, or unmodified when
    /// shorter than 16 characters (empty when absent).
    pub formatted_code: String,
}

/// Extract the digital stamp value before the revision.
pub fn extract_stamp_before(text: &str) -> Option<String> {
    DS_SEBELUM.captures(text).map(|caps| caps[1].to_string())
}

/// Extract the digital stamp value after the revision.
pub fn extract_stamp_after(text: &str) -> Option<String> {
    DS_SESUDAH.captures(text).map(|caps| caps[1].to_string())
}

/// Compare the two stamp values and derive the formatted code.
///
/// The formatted code depends on `after` alone, independent of the
/// comparison outcome.
pub fn compare_stamps(before: Option<&str>, after: Option<&str>) -> StampComparison {
    let status = match (before, after) {
        (Some(b), Some(a)) if b == a => StampStatus::Unchanged,
        (Some(_), Some(_)) => StampStatus::Changed,
        _ => StampStatus::Unknown,
    };

    StampComparison {
        status,
        formatted_code: format_stamp_code(after.unwrap_or("")),
    }
}

/// Format a stamp code as four 4-character groups joined by `-`.
///
/// Applies only when the code has at least 16 characters (the first 16 are
/// used); shorter codes pass through unmodified. Counts characters, not
/// bytes, so multi-byte input cannot split a char boundary.
pub fn format_stamp_code(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() < 16 {
        return code.to_string();
    }
    let group = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();
    format!(
        "{}-{}-{}-{}",
        group(0..4),
        group(4..8),
        group(8..12),
        group(12..16)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_stamps_labeled() {
        let text = "Digital Stamp Sebelum : 1111222233334444\nDigital Stamp Sesudah : 5555666677778888";
        assert_eq!(
            extract_stamp_before(text),
            Some("1111222233334444".to_string())
        );
        assert_eq!(
            extract_stamp_after(text),
            Some("5555666677778888".to_string())
        );
    }

    #[test]
    fn test_extract_stamps_case_and_whitespace_tolerant() {
        let text = "DIGITAL  STAMP  SEBELUM: 123\ndigital stamp sesudah :456";
        assert_eq!(extract_stamp_before(text), Some("123".to_string()));
        assert_eq!(extract_stamp_after(text), Some("456".to_string()));
    }

    #[test]
    fn test_compare_equal_is_unchanged() {
        let cmp = compare_stamps(Some("1111222233334444"), Some("1111222233334444"));
        assert_eq!(cmp.status, StampStatus::Unchanged);
        assert_eq!(cmp.status.label(), "tidak berubah yaitu DS:");
        assert_eq!(cmp.status.nd_marker(), "tidak");
        assert_eq!(cmp.formatted_code, "1111-2222-3333-4444");
    }

    #[test]
    fn test_compare_different_is_changed() {
        let cmp = compare_stamps(Some("111"), Some("222"));
        assert_eq!(cmp.status, StampStatus::Changed);
        assert_eq!(cmp.status.label(), "berubah yaitu DS:");
        assert_eq!(cmp.status.nd_marker(), "");
    }

    #[test]
    fn test_compare_absent_side_is_unknown() {
        let cmp = compare_stamps(None, None);
        assert_eq!(cmp.status, StampStatus::Unknown);
        assert_eq!(cmp.status.label(), "");
        assert_eq!(cmp.formatted_code, "");

        // Formatted code still derives from the after side when present.
        let cmp = compare_stamps(None, Some("1111222233334444"));
        assert_eq!(cmp.status, StampStatus::Unknown);
        assert_eq!(cmp.formatted_code, "1111-2222-3333-4444");
    }

    #[test]
    fn test_format_stamp_code_grouping() {
        assert_eq!(
            format_stamp_code("1234567890123456"),
            "1234-5678-9012-3456"
        );
        // Longer codes are truncated to the first 16 characters.
        assert_eq!(
            format_stamp_code("123456789012345678"),
            "1234-5678-9012-3456"
        );
    }

    #[test]
    fn test_format_stamp_code_short_is_identity() {
        assert_eq!(format_stamp_code("123456789012345"), "123456789012345");
        assert_eq!(format_stamp_code(""), "");
    }

    #[test]
    fn test_extract_stamps_require_ascii_digits() {
        // Devanagari digits are Unicode `\d` but not stamp values.
        let text = "Digital Stamp Sesudah : ००००००००००००००००";
        assert_eq!(extract_stamp_after(text), None);

        let cmp = compare_stamps(None, extract_stamp_after(text).as_deref());
        assert_eq!(cmp.status, StampStatus::Unknown);
        assert_eq!(cmp.formatted_code, "");
    }

    #[test]
    fn test_format_stamp_code_multibyte_input_does_not_panic() {
        // 16 three-byte chars: grouping must count chars, not bytes.
        let code = "०".repeat(16);
        let group = "०".repeat(4);
        assert_eq!(
            format_stamp_code(&code),
            format!("{g}-{g}-{g}-{g}", g = group)
        );
    }
}
