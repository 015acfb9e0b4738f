use eframe::egui;

use crate::config::Config;
use crate::state::{AppState, Page};
use crate::ui::{dashboard, panels, upload};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PosDashboardApp {
    pub config: Config,
    pub state: AppState,
}

impl PosDashboardApp {
    pub fn new(config: Config) -> Self {
        let state = AppState::new(&config);
        Self { config, state }
    }
}

impl eframe::App for PosDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + status line ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: navigation + dashboard controls ----
        egui::SidePanel::left("nav_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: current page ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.page {
            Page::ViewDashboard => dashboard::show(ui, &self.state),
            Page::UploadData => upload::show(ui, &mut self.state, &self.config),
        });
    }
}
