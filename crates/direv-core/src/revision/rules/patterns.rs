//! Regex patterns for DIPA revision-document extraction.

use lazy_static::lazy_static;
use regex::Regex;

// Digit classes are ASCII-only: Unicode `\d` would also capture non-ASCII
// digits, breaking the invariant that extracted fields are ASCII digit
// strings (and the byte-slicing stamp formatter downstream).
lazy_static! {
    // Satker code: first standalone run of exactly 6 digits
    pub static ref SATKER_CODE: Regex = Regex::new(
        r"\b([0-9]{6})\b"
    ).unwrap();

    // Revision number after the "REVISI KE :" label
    pub static ref REVISI_KE: Regex = Regex::new(
        r"(?i)REVISI\s+KE\s*:\s*([0-9]+)"
    ).unwrap();

    // Digital stamp before the revision
    pub static ref DS_SEBELUM: Regex = Regex::new(
        r"(?i)Digital\s+Stamp\s+Sebelum\s*:\s*([0-9]+)"
    ).unwrap();

    // Digital stamp after the revision
    pub static ref DS_SESUDAH: Regex = Regex::new(
        r"(?i)Digital\s+Stamp\s+Sesudah\s*:\s*([0-9]+)"
    ).unwrap();
}
