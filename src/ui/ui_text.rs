//! Every user-visible string in one place.

pub struct UiText {
    pub window_title: &'static str,
    pub header: &'static str,

    // Connection section
    pub server_heading: &'static str,
    pub base_url_label: &'static str,
    pub apply_base_url: &'static str,
    pub health_button: &'static str,
    /// Status bar caption for the active base URL; `metric` adds the colon
    pub active_server_label: &'static str,

    // Fit section
    pub fit_heading: &'static str,
    pub ticker_label: &'static str,
    pub ticker_hint: &'static str,
    pub use_new_data_label: &'static str,
    pub observations_label: &'static str,
    pub p_label: &'static str,
    pub q_label: &'static str,
    pub fit_button: &'static str,

    // Predict section
    pub predict_heading: &'static str,
    pub days_label: &'static str,
    pub predict_button: &'static str,

    // Results panel
    pub results_heading: &'static str,
    pub results_placeholder: &'static str,
    pub fit_report_title: &'static str,
    pub forecast_report_title: &'static str,
    pub health_report_title: &'static str,
    pub error_report_title: &'static str,
    pub status_success: &'static str,
    pub status_failed: &'static str,
    pub status_connected: &'static str,
    pub forecast_table_heading: &'static str,
    pub forecast_rule: &'static str,
    pub forecast_note: &'static str,

    // Validation modal
    pub input_error_title: &'static str,
    pub ok_button: &'static str,

    // Status line
    pub status_ready: &'static str,
    pub status_training: &'static str,
    pub status_predicting: &'static str,
    pub status_checking: &'static str,
    pub status_fit_ok: &'static str,
    pub status_fit_failed_prefix: &'static str,
    pub status_predict_ok: &'static str,
    pub status_predict_failed_prefix: &'static str,
    pub status_health_ok: &'static str,
    pub status_error_prefix: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "GARCH Model API - Volatility Forecasting",
    header: "GARCH Model API Client",

    server_heading: "API Server",
    base_url_label: "Base URL:",
    apply_base_url: "Apply",
    health_button: "Check API Health",
    active_server_label: "Server",

    fit_heading: "Train GARCH Model",
    ticker_label: "Ticker:",
    ticker_hint: "e.g., SHOPERSTOP.BSE",
    use_new_data_label: "Use New Data",
    observations_label: "Observations:",
    p_label: "P (GARCH):",
    q_label: "Q (ARCH):",
    fit_button: "Train Model",

    predict_heading: "Predict Volatility",
    days_label: "Days Ahead:",
    predict_button: "Get Forecast",

    results_heading: "Results",
    results_placeholder: "Results will appear here...",
    fit_report_title: "=== Model Training Result ===",
    forecast_report_title: "=== Volatility Forecast ===",
    health_report_title: "=== API Health Check ===",
    error_report_title: "=== Error ===",
    status_success: "✓ Success",
    status_failed: "✗ Failed",
    status_connected: "✓ Connected",
    forecast_table_heading: "Day-by-Day Forecast:",
    forecast_rule: "─────────────────────",
    forecast_note: "Note: Values represent predicted volatility (standard deviation)",

    input_error_title: "Input Error",
    ok_button: "OK",

    status_ready: "Ready",
    status_training: "Training model...",
    status_predicting: "Fetching prediction...",
    status_checking: "Checking API health...",
    status_fit_ok: "Model trained successfully!",
    status_fit_failed_prefix: "Training failed: ",
    status_predict_ok: "Forecast received successfully!",
    status_predict_failed_prefix: "Prediction failed: ",
    status_health_ok: "API is healthy and connected!",
    status_error_prefix: "Error: ",
};
