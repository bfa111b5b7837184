mod backend_bridge;
mod config;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::{load_settings, CliArgs};
use crate::controller::events::UiEvent;
use crate::ui::ChecklistApp;

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let (settings, file_error) = load_settings(&args);
    init_tracing(&settings.log_level);
    if let Some(err) = file_error {
        tracing::warn!("ignoring settings file: {err:#}");
    }
    tracing::info!(
        catalog = ?settings.catalog_source(),
        load_delay_ms = settings.load_delay_ms,
        "starting checklist"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(16);
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    let window_title = settings.window_title.clone();
    eframe::run_native(
        &window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChecklistApp::bootstrap(cmd_tx, ui_rx, &settings)))),
    )
    .map_err(|err| anyhow::anyhow!("checklist window failed: {err}"))
}
