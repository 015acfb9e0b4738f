use eframe::egui;

use pos_dashboard::app::PosDashboardApp;
use pos_dashboard::config::Config;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {e}");
        Config::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "POS Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(PosDashboardApp::new(config)))),
    )
}
