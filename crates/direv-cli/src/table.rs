//! Reference-table loaders (CSV and spreadsheet formats).
//!
//! Both loaders read six positional columns: satker code, name, KPPN code,
//! official title, copy recipient, ref value. Missing trailing cells become
//! empty strings. A leading header row is skipped when its key cell
//! contains a non-digit character after normalization.

use std::path::Path;

use anyhow::Context;
use tracing::debug;

use direv_core::reference::{normalize_key, ReferenceRecord, ReferenceTable};

/// Load a reference table, dispatching on the file extension.
pub fn load_reference(path: &Path) -> anyhow::Result<ReferenceTable> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "csv" => load_csv(path),
        "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => load_spreadsheet(path),
        other => anyhow::bail!("Unsupported reference table format: {}", other),
    }
}

fn load_csv(path: &Path) -> anyhow::Result<ReferenceTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open reference CSV: {}", path.display()))?;

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let cells: Vec<String> = record.iter().map(|c| c.to_string()).collect();

        if index == 0 && is_header_row(&cells) {
            continue;
        }
        records.push(record_from_cells(&cells));
    }

    debug!("Loaded {} reference rows from {}", records.len(), path.display());
    Ok(ReferenceTable::from_records(records))
}

fn load_spreadsheet(path: &Path) -> anyhow::Result<ReferenceTable> {
    use calamine::{open_workbook_auto, Data, Reader};

    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open reference spreadsheet: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Spreadsheet has no worksheets: {}", path.display()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read worksheet: {}", sheet_name))?;

    let mut records = Vec::new();
    let mut first_kept = true;
    for row in range.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Data::Empty => String::new(),
                Data::String(s) => s.clone(),
                Data::Float(f) => f.to_string(),
                Data::Int(i) => i.to_string(),
                Data::Bool(b) => b.to_string(),
                Data::Error(e) => format!("#ERR:{e:?}"),
                Data::DateTime(dt) => dt.to_string(),
                Data::DateTimeIso(s) => s.clone(),
                Data::DurationIso(s) => s.clone(),
            })
            .collect();

        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }
        if first_kept {
            first_kept = false;
            if is_header_row(&cells) {
                continue;
            }
        }
        records.push(record_from_cells(&cells));
    }

    debug!("Loaded {} reference rows from {}", records.len(), path.display());
    Ok(ReferenceTable::from_records(records))
}

/// The first row is a header iff its normalized key cell contains a
/// non-digit character.
fn is_header_row(cells: &[String]) -> bool {
    let key = cells.first().map(String::as_str).unwrap_or("");
    normalize_key(key).chars().any(|c| !c.is_ascii_digit())
}

fn record_from_cells(cells: &[String]) -> ReferenceRecord {
    let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
    ReferenceRecord {
        satker_code: cell(0),
        satker_name: cell(1),
        kppn_code: cell(2),
        official_title: cell(3),
        copy_recipient: cell(4),
        ref_value: cell(5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_csv_with_header_and_float_key() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Kode Satker,Nama Satker,KPPN,Pejabat,Tembusan,ref").unwrap();
        writeln!(file, "123456.0,Dept X,019,KPA,Sekjen,R1").unwrap();
        writeln!(file, "654321,Dept Y,020").unwrap();
        file.flush().unwrap();

        let table = load_reference(file.path()).unwrap();
        assert_eq!(table.len(), 2);

        let resolved = table.lookup("123456").unwrap();
        assert_eq!(resolved.satker_name, "Dept X");
        assert_eq!(resolved.kppn_code, "019");

        // Short rows pad trailing cells with empty strings.
        let short = table.lookup("654321").unwrap();
        assert_eq!(short.official_title, "");
        assert_eq!(short.ref_value, "");
    }

    #[test]
    fn test_load_csv_without_header() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "123456,Dept X,019,KPA,Sekjen,R1").unwrap();
        file.flush().unwrap();

        let table = load_reference(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.lookup("123456").is_some());
    }

    #[test]
    fn test_load_xlsx_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/reference.xlsx");
        let table = load_reference(&path).unwrap();

        // Header row and the empty row are skipped.
        assert_eq!(table.len(), 2);

        // Numeric key cell converts to a digit string and resolves.
        let resolved = table.lookup("123456").unwrap();
        assert_eq!(resolved.satker_name, "Dept X");
        assert_eq!(resolved.kppn_code, "019");
        assert_eq!(resolved.official_title, "Kuasa Pengguna Anggaran");
        assert_eq!(resolved.ref_value, "R1");

        // String key keeps its leading zero; short rows pad with empty cells.
        let zero = table.lookup("012345").unwrap();
        assert_eq!(zero.satker_name, "Dept Z");
        assert_eq!(zero.kppn_code, "020");
        assert_eq!(zero.official_title, "");
        assert!(table.lookup("12345").is_none());
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(load_reference(Path::new("table.txt")).is_err());
    }

    #[test]
    fn test_is_header_row() {
        assert!(is_header_row(&["Kode Satker".to_string()]));
        assert!(!is_header_row(&["123456".to_string()]));
        assert!(!is_header_row(&["123456.0".to_string()]));
    }
}
