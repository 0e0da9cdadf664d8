// User interface components
pub mod app;
pub mod app_async;
pub mod config;
pub mod controller;
pub mod styles;
pub mod ui_panels;
pub mod ui_render;
pub mod ui_text;
pub mod utils;
pub mod view;

// Re-export main app
pub use app::{LaunchOptions, OptiBotApp};
pub use config::UI_CONFIG;
pub use controller::{AnalysisPhase, WidgetController};
pub use view::{ElementId, View, ViewModel};
