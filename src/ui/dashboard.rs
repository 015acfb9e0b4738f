use eframe::egui::{Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{charts, table};
use crate::view::DashboardView;

// ---------------------------------------------------------------------------
// Dashboard page (central panel)
// ---------------------------------------------------------------------------

/// Render the dashboard: full table, below-threshold table, distribution
/// charts, and live search results. Everything is recomputed from the
/// session state on each frame.
pub fn show(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data uploaded yet. Use 'Upload Data' to load a POS workbook.");
        });
        return;
    };

    let controls = state.controls();
    let view = DashboardView::build(dataset, &controls);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if let Some(name) = &state.file_name {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label("Currently displaying data from:");
                    ui.label(RichText::new(name).code());
                });
                ui.add_space(4.0);
            }

            ui.heading("POS Data Dashboard");
            table::records_table(ui, "all_records", &view.rows, 360.0);

            ui.add_space(10.0);
            ui.heading(format!(
                "Vehicles Below EPKM Threshold (Rs. {:.2})",
                controls.threshold
            ));
            if view.below.is_empty() {
                ui.label(
                    RichText::new(format!(
                        "All vehicles have EPKM above Rs. {:.2}!",
                        controls.threshold
                    ))
                    .color(Color32::LIGHT_GREEN),
                );
            } else {
                table::records_table(ui, "below_threshold", &view.below, 300.0);
            }

            ui.add_space(10.0);
            ui.heading("EPKM Distribution Across Branches and Routes");
            if view.below.is_empty() {
                ui.label("No under-threshold records to chart.");
            } else {
                charts::branch_count_chart(ui, &view.branch_counts);
                ui.add_space(8.0);
                charts::route_epkm_chart(ui, &view.below);
            }

            if DashboardView::searching(&controls) {
                ui.add_space(10.0);
                ui.heading(format!(
                    "Search Results for Route '{}' and Branch '{}'",
                    controls.search_route, controls.search_branch
                ));
                table::records_table(ui, "search_results", &view.search_rows, 300.0);
            }
        });
}
