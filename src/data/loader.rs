use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, Xlsx};

use super::model::{Dataset, Record, REQUIRED_COLUMNS};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset from a file.  Dispatch by extension.
///
/// Only `.xlsx` is accepted; uploads are constrained to the Excel container
/// format.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" => load_xlsx_bytes(&std::fs::read(path)?),
        other => Err(Error::Format(format!(
            "Unsupported file extension: .{other}"
        ))),
    }
}

/// Parse and validate an xlsx workbook held in memory.
///
/// The first worksheet is read; its header row must contain every column in
/// [`REQUIRED_COLUMNS`] (exact, case-sensitive, any order, extras ignored).
/// The `SNO` serial column, if present, is one of those extras and is
/// therefore dropped. Returns [`Error::Schema`] naming all missing columns,
/// or [`Error::Format`] when the container itself cannot be read.
pub fn load_xlsx_bytes(bytes: &[u8]) -> Result<Dataset> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| Error::Format(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Format("workbook contains no sheets".to_string()))?
        .map_err(|e| Error::Format(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| Error::Format("sheet has no header row".to_string()))?;
    let headers: Vec<String> = header.iter().map(cell_text).collect();

    let columns = column_indices(&headers)?;

    let mut records = Vec::new();
    for (row_no, row) in rows.enumerate() {
        // Trailing blank rows are common in hand-edited sheets; skip them.
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }

        let cell = |i: usize| row.get(columns[i]).unwrap_or(&Data::Empty);

        records.push(Record {
            branch: cell_text(cell(0)),
            route_number: cell_text(cell(1)),
            vehicle_number: cell_text(cell(2)),
            route_name: cell_text(cell(3)),
            kind: cell_text(cell(4)),
            operating_km_cost: cell_number(cell(5), row_no, "OPERATING_KM_COST")? as i64,
            earning_per_km: round2(cell_number(cell(6), row_no, "EARNING_PER_KM")?),
            remarks: cell_text(cell(7)),
        });
    }

    Ok(Dataset::new(records))
}

// ---------------------------------------------------------------------------
// Header / cell helpers
// ---------------------------------------------------------------------------

/// Map each required column to its position in the header row. Missing
/// columns are collected and reported together, not one at a time.
fn column_indices(headers: &[String]) -> Result<[usize; REQUIRED_COLUMNS.len()]> {
    let mut indices = [0usize; REQUIRED_COLUMNS.len()];
    let mut missing = Vec::new();

    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        match headers.iter().position(|h| h == name) {
            Some(i) => *slot = i,
            None => missing.push(name.to_string()),
        }
    }

    if missing.is_empty() {
        Ok(indices)
    } else {
        Err(Error::Schema(missing))
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        // Route codes and vehicle numbers sometimes arrive as numeric cells.
        other => other.to_string(),
    }
}

fn cell_number(cell: &Data, row_no: usize, column: &str) -> Result<f64> {
    match cell {
        Data::Float(f) => Ok(*f),
        Data::Int(i) => Ok(*i as f64),
        Data::String(s) => s.trim().parse::<f64>().map_err(|_| {
            Error::Format(format!("row {}: '{s}' in {column} is not a number", row_no + 2))
        }),
        other => Err(Error::Format(format!(
            "row {}: unexpected {column} value {other:?}",
            row_no + 2
        ))),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn schema_error_lists_every_missing_column() {
        let err = column_indices(&headers(&["SNO", "BRANCH", "ROUTE_NUMBER"])).unwrap_err();
        match err {
            Error::Schema(missing) => {
                assert_eq!(
                    missing,
                    vec![
                        "VEHICLE_NUMBER",
                        "ROUTE_NAME",
                        "TYPE",
                        "OPERATING_KM_COST",
                        "EARNING_PER_KM",
                        "REMARKS"
                    ]
                );
            }
            other => panic!("expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn superset_headers_accepted_in_any_order() {
        let mut names = vec!["SNO", "EXTRA"];
        let mut reversed: Vec<&str> = REQUIRED_COLUMNS.into_iter().rev().collect();
        names.append(&mut reversed);

        let indices = column_indices(&headers(&names)).expect("superset must validate");
        // BRANCH is the last header after reversal.
        assert_eq!(indices[0], names.len() - 1);
    }

    #[test]
    fn required_names_are_case_sensitive() {
        let mut names: Vec<String> = REQUIRED_COLUMNS.iter().map(|s| s.to_string()).collect();
        names[0] = "branch".to_string();
        let err = column_indices(&names).unwrap_err();
        match err {
            Error::Schema(missing) => assert_eq!(missing, vec!["BRANCH"]),
            other => panic!("expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn numeric_text_cells_parse() {
        let v = cell_number(&Data::String(" 27.456 ".to_string()), 0, "EARNING_PER_KM").unwrap();
        assert_eq!(round2(v), 27.46);
    }
}
