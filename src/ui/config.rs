use eframe::egui::Color32;

pub use crate::ui::ui_text::{UiText, ui_text};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub top_panel: Color32,
    pub signal_buy: Color32,
    pub signal_sell: Color32,
    pub calc_ok: Color32,
    pub calc_error: Color32,
    pub timeframe_active: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub preview_max_height: f32,
    pub content_max_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(250, 204, 21),
        subsection_heading: Color32::from_rgb(148, 163, 184),
        central_panel: Color32::from_rgb(15, 23, 42),
        top_panel: Color32::from_rgb(2, 6, 23),
        signal_buy: Color32::from_rgb(0x4a, 0xde, 0x80), // #4ade80
        signal_sell: Color32::from_rgb(0xf8, 0x71, 0x71), // #f87171
        calc_ok: Color32::from_rgb(0x4a, 0xde, 0x80),
        calc_error: Color32::from_rgb(0xf8, 0x71, 0x71),
        timeframe_active: Color32::from_rgb(59, 130, 246),
    },
    preview_max_height: 220.0,
    content_max_width: 420.0,
};
