mod app;
mod charts;
mod color;
mod config;
mod data;
mod render;
mod selection;
mod state;
mod stats;
mod ui;
mod views;

use anyhow::Context;
use app::DiagnosisDashboardApp;
use config::DashboardConfig;
use data::bundled::load_breast_cancer;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::load();

    let dataset = load_breast_cancer().context("loading the bundled breast cancer dataset")?;
    log::info!(
        "Loaded bundled dataset: {} rows x {} columns",
        dataset.n_rows(),
        dataset.n_columns()
    );
    let state = AppState::new(dataset, config.preview_rows);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Breast Cancer Diagnosis Visualization",
        options,
        Box::new(|_cc| Ok(Box::new(DiagnosisDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
