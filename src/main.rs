// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod config;
mod drivers;
mod gui;
mod panel;
mod types;
use anyhow::Context;
use eframe::egui;
use config::ConsoleConfig;
// entry point
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = ConsoleConfig::from_env()?;
    let app = gui::ConsoleApp::new(&config).context("building sensor panels")?;
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(config.window_size)
        .with_title(config.window_title.clone());
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    log::info!("starting console with {} panels", config.panels.len());
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("console window failed: {e}"))
}
