mod app;
mod chart;
mod config;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::IndexViewerApp;
use config::{CONFIG_FILE_NAME, ViewerConfig};
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ViewerConfig::load_or_default(Path::new(CONFIG_FILE_NAME));
    log::debug!("Config: {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Index Viewer – Stock Index Closing Values",
        options,
        Box::new(move |cc| Ok(Box::new(IndexViewerApp::new(cc, config)))),
    )
}
