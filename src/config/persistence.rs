//! UI state persistence configuration

/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = ".garch_client_state.json";

/// Storage key the form contents are saved under
pub const FORM_STATE_KEY: &str = eframe::APP_KEY;
