use eframe::egui::{Button, Color32, RichText, Ui, vec2};

use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders a "Label: Value" pair with consistent spacing and styling.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Renders a section header using the configured global color.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);

    /// Full-width filled action button. Returns true when clicked.
    fn action_button(&mut self, enabled: bool, text: &str, fill: Color32) -> bool;
}

impl UiStyleExt for Ui {
    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label(RichText::new(metric_caption(label)).small().color(color));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_header(&mut self, text: impl Into<String>) {
        self.heading(RichText::new(text).color(UI_CONFIG.colors.heading).strong());
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(Color32::from_rgb(255, 100, 100)));
    }

    fn action_button(&mut self, enabled: bool, text: &str, fill: Color32) -> bool {
        let button = Button::new(RichText::new(text).strong().color(Color32::WHITE))
            .fill(fill)
            .min_size(vec2(self.available_width(), 30.0));
        self.add_enabled(enabled, button).clicked()
    }
}

/// "Label:" with exactly one trailing colon, whether or not `label` brings its own.
fn metric_caption(label: &str) -> String {
    format!("{}:", label.trim_end().trim_end_matches(':'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::config::UI_TEXT;

    #[test]
    fn metric_caption_never_doubles_the_colon() {
        assert_eq!(metric_caption(UI_TEXT.active_server_label), "Server:");
        assert_eq!(metric_caption(UI_TEXT.base_url_label), "Base URL:");
        assert_eq!(metric_caption("Server: "), "Server:");
    }
}
