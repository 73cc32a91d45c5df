//! Plain-text reports shown in the results panel.

use crate::domain::{FitResult, ForecastResult, HealthResult};
use crate::ui::config::UI_TEXT;

/// Volatility fraction as a percentage with four decimals: `0.023456` -> `2.3456%`.
pub fn format_volatility_pct(volatility: f64) -> String {
    format!("{:.4}%", volatility * 100.0)
}

fn status_word(success: bool) -> &'static str {
    if success {
        UI_TEXT.status_success
    } else {
        UI_TEXT.status_failed
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

pub fn fit_report(result: &FitResult) -> String {
    let mut out = format!(
        "{}\n\nStatus: {}\nMessage: {}\n\n",
        UI_TEXT.fit_report_title,
        status_word(result.success),
        result.message
    );

    if result.success {
        out.push_str(&format!("Ticker: {}\n", result.ticker));
        out.push_str(&format!("Observations: {}\n", result.n_observations));
        out.push_str(&format!("GARCH(p={}, q={})\n", result.p, result.q));
        out.push_str(&format!("Use New Data: {}\n", yes_no(result.use_new_data)));
    }
    out
}

pub fn forecast_report(result: &ForecastResult) -> String {
    let mut out = format!(
        "{}\n\nStatus: {}\nMessage: {}\n\n",
        UI_TEXT.forecast_report_title,
        status_word(result.success),
        result.message
    );

    if result.success && !result.forecast.is_empty() {
        out.push_str(&format!(
            "{}\n{}\n",
            UI_TEXT.forecast_table_heading, UI_TEXT.forecast_rule
        ));
        for point in &result.forecast {
            out.push_str(&format!(
                "Day {}: {}\n",
                point.label,
                format_volatility_pct(point.volatility)
            ));
        }
        out.push_str(&format!(
            "\n{}\n{}\n",
            UI_TEXT.forecast_rule, UI_TEXT.forecast_note
        ));
    }
    out
}

pub fn health_report(result: &HealthResult) -> String {
    format!(
        "{}\n\nStatus: {}\nMessage: {}\n",
        UI_TEXT.health_report_title, UI_TEXT.status_connected, result.message
    )
}

pub fn error_report(error: &str) -> String {
    format!("{}\n\n✗ {}\n", UI_TEXT.error_report_title, error)
}
