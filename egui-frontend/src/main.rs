use eframe::egui;
use log::info;

mod app;
mod portfolio;
mod ui;

use app::InvestmentTrackerApp;
use ui::components::styling::setup_app_style;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Investment Tracker egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0]) // Good size for the dashboard
            .with_min_inner_size([800.0, 600.0]) // Minimum usable size
            .with_title("Unified Investment Tracker")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Unified Investment Tracker",
        options,
        Box::new(|cc| {
            setup_app_style(&cc.egui_ctx);
            Ok(Box::new(InvestmentTrackerApp::new()))
        }),
    )
}
