#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use domain::{FitRequest, ForecastResult, OperationKind, PredictRequest};
pub use engine::{ApiEvent, ApiGateway, HttpClient, ReqwestTransport};
pub use ui::GarchClientApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;
use tokio::runtime::Handle;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the forecasting service (overrides the saved one)
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    args: &Cli,
    runtime: Handle,
) -> anyhow::Result<Box<dyn eframe::App>> {
    let transport = ReqwestTransport::new(runtime)?;
    let app = ui::GarchClientApp::new(cc, transport, args.base_url.clone());
    Ok(Box::new(app))
}
