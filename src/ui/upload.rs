use eframe::egui::{self, RichText, Ui};

use crate::config::Config;
use crate::data::{archive, loader};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Upload page (central panel)
// ---------------------------------------------------------------------------

/// Render the password-gated upload page. The gate opens once per session
/// and never reverts; a wrong password just leaves the form hidden.
pub fn show(ui: &mut Ui, state: &mut AppState, config: &Config) {
    ui.heading("Upload POS Excel File");
    ui.add_space(6.0);

    if !state.authenticated {
        ui.label("Enter the admin password for upload:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.password_input)
                .password(true)
                .desired_width(220.0),
        );
        let submitted =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if submitted || ui.button("Unlock").clicked() {
            let password = state.password_input.clone();
            if state.authenticate(config, &password) {
                state.password_input.clear();
                state.set_status("Password correct! You can now upload data.", false);
            }
            // Wrong password: stay silent, keep the form hidden.
        }
        return;
    }

    if ui.button("Select Excel file…").clicked() {
        pick_and_load(state, config);
    }

    ui.add_space(6.0);
    ui.label(
        RichText::new(format!(
            "Accepted uploads are archived under {}",
            config.upload_dir.display()
        ))
        .small()
        .italics(),
    );
}

// ---------------------------------------------------------------------------
// Upload pipeline
// ---------------------------------------------------------------------------

/// Pick a workbook, validate it, replace the session dataset, and archive
/// the original bytes. A rejected file leaves the previous dataset intact.
fn pick_and_load(state: &mut AppState, config: &Config) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Upload POS workbook")
        .add_filter("Excel", &["xlsx"])
        .pick_file()
    else {
        return;
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => {
            log::error!("Failed to read {}: {e}", path.display());
            state.set_status(format!("Error processing the file: {e}"), true);
            return;
        }
    };

    match loader::load_xlsx_bytes(&bytes) {
        Ok(dataset) => {
            log::info!("Loaded {} records from {file_name}", dataset.len());
            state.set_dataset(dataset, file_name.clone());

            match archive::archive_upload(&config.upload_dir, &bytes) {
                Ok(saved) => state.set_status(
                    format!("File '{file_name}' uploaded and saved to {}", saved.display()),
                    false,
                ),
                Err(e) => {
                    log::error!("Archive write failed: {e}");
                    state.set_status(
                        format!("File '{file_name}' uploaded, but archiving failed: {e}"),
                        true,
                    );
                }
            }
        }
        Err(e) => {
            log::error!("Upload rejected: {e}");
            state.set_status(e.to_string(), true);
        }
    }
}
