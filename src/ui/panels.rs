use chrono::{Duration, Local};
use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::export;
use crate::data::filter;
use crate::data::model::Record;
use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar: app name, data-as-of date, dataset summary, and
/// the session status line.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("POS Dashboard");
        ui.separator();

        // Collections are keyed to the previous operating day.
        let yesterday = (Local::now() - Duration::days(1)).format("%d-%m-%Y");
        ui.label(format!("Data as of {yesterday}"));

        if let Some(ds) = &state.dataset {
            ui.separator();
            ui.label(format!("{} records loaded", ds.len()));
        }

        if let Some((msg, is_error)) = &state.status_message {
            ui.separator();
            let color = if *is_error {
                Color32::RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – navigation and dashboard controls
// ---------------------------------------------------------------------------

pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Navigation");
    ui.separator();
    ui.radio_value(&mut state.page, Page::ViewDashboard, "View Dashboard");
    ui.radio_value(&mut state.page, Page::UploadData, "Upload Data");

    // Threshold, export, and search only make sense on a loaded dashboard.
    if state.page != Page::ViewDashboard || state.dataset.is_none() {
        return;
    }

    ui.separator();
    ui.strong("Threshold Settings");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Threshold EPKM (Rs.)");
        ui.add(
            egui::DragValue::new(&mut state.threshold)
                .speed(1.0)
                .range(0.0..=500.0)
                .fixed_decimals(2),
        );
    });

    ui.separator();
    ui.strong("Download Filtered Data");
    let below_count = state
        .dataset
        .as_ref()
        .map(|ds| filter::below_threshold(ds, state.threshold).len())
        .unwrap_or(0);
    if below_count == 0 {
        ui.label(
            RichText::new("No data to download.")
                .italics()
                .color(Color32::GRAY),
        );
    } else if ui
        .button(format!("Download Below Threshold ({below_count})"))
        .clicked()
    {
        download_filtered(state);
    }

    ui.separator();
    ui.strong("Search Filters");
    ui.add(
        egui::TextEdit::singleline(&mut state.search_route)
            .hint_text("Route code or name"),
    );
    ui.add(egui::TextEdit::singleline(&mut state.search_branch).hint_text("Branch"));
}

// ---------------------------------------------------------------------------
// Export dialog
// ---------------------------------------------------------------------------

fn download_filtered(state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let records: Vec<Record> = filter::below_threshold(dataset, state.threshold)
        .into_iter()
        .map(|i| dataset.records[i].clone())
        .collect();

    let Some(path) = rfd::FileDialog::new()
        .set_title("Save below-threshold data")
        .set_file_name(export::export_file_name(state.threshold))
        .add_filter("Excel", &["xlsx"])
        .save_file()
    else {
        return;
    };

    let result = export::write_workbook(&records)
        .and_then(|bytes| std::fs::write(&path, bytes).map_err(Into::into));

    match result {
        Ok(()) => {
            log::info!("Exported {} records to {}", records.len(), path.display());
            state.set_status(format!("Saved {}", path.display()), false);
        }
        Err(e) => {
            log::error!("Export failed: {e}");
            state.set_status(format!("Export failed: {e}"), true);
        }
    }
}
