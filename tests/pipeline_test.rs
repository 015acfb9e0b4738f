//! Integration tests for the upload → filter → export pipeline

use calamine::{Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use tempfile::tempdir;

use pos_dashboard::config::Config;
use pos_dashboard::data::export::{write_workbook, EXPORT_SHEET};
use pos_dashboard::data::loader::{load_file, load_xlsx_bytes};
use pos_dashboard::data::model::{Dataset, Record, REQUIRED_COLUMNS, SERIAL_COLUMN};
use pos_dashboard::data::{archive, filter};
use pos_dashboard::error::Error;
use pos_dashboard::state::AppState;

fn record(branch: &str, route: &str, epkm: f64) -> Record {
    Record {
        branch: branch.to_string(),
        route_number: route.to_string(),
        vehicle_number: format!("TN45N{route}"),
        route_name: format!("{branch} - Route {route}"),
        kind: "Express".to_string(),
        operating_km_cost: 28,
        earning_per_km: epkm,
        remarks: String::new(),
    }
}

/// Workbook bytes with only a header row.
fn workbook_with_headers(headers: &[&str]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    workbook.save_to_buffer().unwrap()
}

/// Test that a missing required column rejects the upload and names it,
/// leaving the previous session dataset untouched
#[test]
fn missing_column_is_rejected_and_session_kept() {
    let headers: Vec<&str> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|h| *h != "REMARKS")
        .collect();
    let bytes = workbook_with_headers(&headers);

    let config = Config::default();
    let mut state = AppState::new(&config);
    state.set_dataset(
        Dataset::new(vec![record("North", "101", 25.0)]),
        "original.xlsx".to_string(),
    );

    let result = load_xlsx_bytes(&bytes);
    match result {
        Err(Error::Schema(missing)) => assert_eq!(missing, vec!["REMARKS"]),
        other => panic!("expected Schema error, got {other:?}"),
    }

    // The caller only replaces the dataset on Ok, so the session is intact.
    assert_eq!(state.file_name.as_deref(), Some("original.xlsx"));
    assert_eq!(state.dataset.as_ref().unwrap().len(), 1);
}

/// Test that exporting and re-parsing preserves every field value
#[test]
fn export_reparse_round_trip() {
    let records = vec![
        record("North", "101", 25.0),
        record("South", "202", 31.75),
        Record {
            remarks: "Review route viability".to_string(),
            operating_km_cost: 41,
            ..record("West", "303", 18.4)
        },
    ];

    let bytes = write_workbook(&records).expect("export failed");
    let reloaded = load_xlsx_bytes(&bytes).expect("re-parse failed");

    assert_eq!(reloaded.records, records);
}

/// Test that the export carries a single sheet with the expected name
#[test]
fn export_sheet_is_named() {
    let bytes = write_workbook(&[record("North", "101", 25.0)]).unwrap();

    let workbook: Xlsx<_> = Xlsx::new(std::io::Cursor::new(bytes)).unwrap();
    let names = workbook.sheet_names();
    assert_eq!(names.len(), 1);
    assert_eq!(names.first().map(|s| s.as_str()), Some(EXPORT_SHEET));
}

/// Test that serial and extra columns are dropped and numeric cells are
/// normalized (EPKM to 2 decimals, operating cost to a whole number)
#[test]
fn serial_column_dropped_and_numbers_normalized() {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, SERIAL_COLUMN).unwrap();
    for (col, header) in REQUIRED_COLUMNS.iter().enumerate() {
        sheet.write_string(0, (col + 1) as u16, *header).unwrap();
    }
    sheet.write_string(0, 9, "DEPOT").unwrap();

    sheet.write_number(1, 0, 1.0).unwrap();
    sheet.write_string(1, 1, "North").unwrap();
    sheet.write_string(1, 2, "101").unwrap();
    sheet.write_string(1, 3, "TN45N0101").unwrap();
    sheet.write_string(1, 4, "North Express").unwrap();
    sheet.write_string(1, 5, "Express").unwrap();
    sheet.write_number(1, 6, 28.9).unwrap();
    sheet.write_number(1, 7, 27.456).unwrap();
    sheet.write_string(1, 8, "").unwrap();
    sheet.write_string(1, 9, "Central").unwrap();

    let bytes = workbook.save_to_buffer().unwrap();
    let dataset = load_xlsx_bytes(&bytes).expect("superset schema must load");

    assert_eq!(dataset.len(), 1);
    let r = &dataset.records[0];
    assert_eq!(r.operating_km_cost, 28);
    assert_eq!(r.earning_per_km, 27.46);
    assert_eq!(r.branch, "North");
}

/// Test the full path: filter at the default threshold, export the subset,
/// read it back as an upload
#[test]
fn filtered_export_reads_back_as_upload() {
    let dataset = Dataset::new(vec![
        record("North", "101", 25.0),
        record("South", "202", 35.0),
    ]);

    let indices = filter::below_threshold(&dataset, 30.0);
    assert_eq!(indices, vec![0]);

    let subset: Vec<Record> = indices
        .into_iter()
        .map(|i| dataset.records[i].clone())
        .collect();
    let bytes = write_workbook(&subset).unwrap();
    let reloaded = load_xlsx_bytes(&bytes).unwrap();

    assert_eq!(reloaded.records, subset);
    assert_eq!(reloaded.records[0].earning_per_km, 25.0);
}

/// Test that accepted uploads are archived verbatim under timestamped names
#[test]
fn archive_writes_timestamped_copy() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let dir = temp_dir.path().join("uploads");
    let bytes = write_workbook(&[record("North", "101", 25.0)]).unwrap();

    let saved = archive::archive_upload(&dir, &bytes).expect("archive failed");

    let name = saved.file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("uploaded_data_"), "unexpected name {name}");
    assert!(name.ends_with(".xlsx"), "unexpected name {name}");
    assert_eq!(std::fs::read(&saved).unwrap(), bytes);
}

/// Test that only the xlsx container format is accepted
#[test]
fn non_xlsx_extension_is_rejected() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("data.csv");
    std::fs::write(&path, b"BRANCH,ROUTE_NUMBER\n").unwrap();

    match load_file(&path) {
        Err(Error::Format(msg)) => assert!(msg.contains(".csv"), "message was {msg}"),
        other => panic!("expected Format error, got {other:?}"),
    }
}

/// Test that a corrupt container surfaces as a format error, not a panic
#[test]
fn corrupt_container_is_a_format_error() {
    let result = load_xlsx_bytes(b"this is not a zip archive");
    assert!(matches!(result, Err(Error::Format(_))));
}
