#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod platform;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use analysis::{AnalysisResult, CalcOutcome, Signal, calculate};
pub use domain::{AppError, Language};
pub use ui::{LaunchOptions, OptiBotApp, WidgetController};
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Photo to show in the preview on startup
    #[arg(long)]
    pub photo: Option<PathBuf>,

    /// Ignore the stored language and timeframe and start from the defaults
    #[arg(long, default_value_t = false)]
    pub reset_preferences: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, launch: LaunchOptions) -> Box<dyn eframe::App> {
    Box::new(OptiBotApp::new(cc, launch))
}
