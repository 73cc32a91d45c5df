use eframe::egui::Color32;
use std::time::Duration;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub results_background: Color32,
    // Status line, one fill per tone
    pub status_neutral: Color32,
    pub status_positive: Color32,
    pub status_negative: Color32,
    pub status_text_neutral: Color32,
    pub status_text_toned: Color32,
    // Action buttons
    pub health_button: Color32,
    pub fit_button: Color32,
    pub predict_button: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub window_size: [f32; 2],
    pub side_panel_width: f32,
    /// How long a success/failure tone stays on the status line
    pub status_tone_duration: Duration,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(200, 200, 200),
        heading: Color32::from_rgb(52, 152, 219),
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(30, 30, 34),
        side_panel: Color32::from_rgb(25, 25, 25),
        results_background: Color32::from_rgb(20, 20, 22),
        status_neutral: Color32::from_rgb(236, 240, 241),
        status_positive: Color32::from_rgb(39, 174, 96),
        status_negative: Color32::from_rgb(231, 76, 60),
        status_text_neutral: Color32::from_rgb(44, 62, 80),
        status_text_toned: Color32::WHITE,
        health_button: Color32::from_rgb(52, 152, 219),
        fit_button: Color32::from_rgb(39, 174, 96),
        predict_button: Color32::from_rgb(155, 89, 182),
    },
    window_size: [900.0, 700.0],
    side_panel_width: 320.0,
    status_tone_duration: Duration::from_secs(3),
};
