#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use anyhow::Context;
use clap::Parser;
use eframe::{NativeOptions, egui};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use garch_client::config::APP_STATE_PATH;
use garch_client::ui::UI_CONFIG;
use garch_client::ui::config::UI_TEXT;
use garch_client::{Cli, run_app};

fn main() -> anyhow::Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Background runtime for HTTP work; lives until the window closes
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let handle = rt.handle().clone();

    // D. Run the native app
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(UI_CONFIG.window_size)
            .with_title(UI_TEXT.window_title),
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, &args, handle)?)),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    log::info!("Window closed, shutting down");
    Ok(())
}
