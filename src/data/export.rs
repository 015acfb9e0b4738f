use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::model::{Record, REQUIRED_COLUMNS};
use crate::error::{Error, Result};

/// Sheet name for the exported below-threshold subset.
pub const EXPORT_SHEET: &str = "Below Threshold";

fn xe(e: XlsxError) -> Error {
    Error::Export(e.to_string())
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Serialize records to an in-memory xlsx workbook with a single sheet,
/// header row in canonical column order, no index column, record order
/// preserved. The input has already passed validation, so failures here
/// come from the writer itself.
pub fn write_workbook(records: &[Record]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(EXPORT_SHEET).map_err(xe)?;

    let header_format = Format::new().set_bold();
    for (col, name) in REQUIRED_COLUMNS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *name, &header_format)
            .map_err(xe)?;
    }

    for (row_idx, record) in records.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        sheet.write_string(row, 0, &record.branch).map_err(xe)?;
        sheet.write_string(row, 1, &record.route_number).map_err(xe)?;
        sheet.write_string(row, 2, &record.vehicle_number).map_err(xe)?;
        sheet.write_string(row, 3, &record.route_name).map_err(xe)?;
        sheet.write_string(row, 4, &record.kind).map_err(xe)?;
        sheet
            .write_number(row, 5, record.operating_km_cost as f64)
            .map_err(xe)?;
        sheet
            .write_number(row, 6, record.earning_per_km)
            .map_err(xe)?;
        sheet.write_string(row, 7, &record.remarks).map_err(xe)?;
    }

    // Approximate widths; route names and remarks run long.
    sheet.set_column_width(3, 28).map_err(xe)?;
    sheet.set_column_width(7, 36).map_err(xe)?;

    workbook.save_to_buffer().map_err(xe)
}

/// Download name for the filtered subset. Integer thresholds drop the
/// decimal point, matching `below_threshold_30_epkm.xlsx`.
pub fn export_file_name(threshold: f64) -> String {
    if threshold.fract() == 0.0 {
        format!("below_threshold_{}_epkm.xlsx", threshold as i64)
    } else {
        format!("below_threshold_{threshold}_epkm.xlsx")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_threshold_formats_without_decimal_point() {
        assert_eq!(export_file_name(30.0), "below_threshold_30_epkm.xlsx");
    }

    #[test]
    fn fractional_threshold_keeps_its_fraction() {
        assert_eq!(export_file_name(27.5), "below_threshold_27.5_epkm.xlsx");
    }
}
