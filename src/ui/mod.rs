// User interface components
pub mod app;
pub mod config;
pub mod controller;
pub mod form;
pub mod results;
pub mod status;
pub mod styles;
pub mod ui_panels;
pub mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::GarchClientApp;
pub use config::UI_CONFIG;
pub use controller::UiController;
