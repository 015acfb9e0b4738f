use eframe::egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::REQUIRED_COLUMNS;
use crate::view::RowView;

/// EPKM position in the canonical column order.
const EPKM_COL: usize = 6;

// ---------------------------------------------------------------------------
// Record tables
// ---------------------------------------------------------------------------

/// Render a striped record table with a leading 1-based index column.
/// Flagged EPKM cells get the under-threshold styling: bold red on yellow.
pub fn records_table(ui: &mut Ui, id: &str, rows: &[RowView<'_>], max_height: f32) {
    ui.push_id(id, |ui| {
        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(max_height)
            .column(Column::auto());
        for _ in 0..REQUIRED_COLUMNS.len() - 1 {
            builder = builder.column(Column::auto());
        }
        builder = builder.column(Column::remainder());

        builder
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                for name in REQUIRED_COLUMNS {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, rows.len(), |mut row| {
                    let r = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(r.index.to_string());
                    });

                    let cells = r.record.display_cells();
                    for (i, cell) in cells.iter().enumerate() {
                        row.col(|ui| {
                            if i == EPKM_COL && r.flagged {
                                ui.label(
                                    RichText::new(cell.as_str())
                                        .strong()
                                        .color(Color32::RED)
                                        .background_color(Color32::YELLOW),
                                );
                            } else {
                                ui.label(cell.as_str());
                            }
                        });
                    }
                });
            });
    });
}
