use eframe::egui::{
    Align, CentralPanel, Context, Frame, Id, Layout, Margin, Modal, RichText, ScrollArea, SidePanel,
    Spinner, TextEdit, TextStyle, TopBottomPanel,
};

use crate::domain::OperationKind;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::status::StatusTone;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{ConnectionPanel, ControlEvent, FitPanel, Panel, PredictPanel};
use crate::utils::app_time::AppInstant;

use super::app::GarchClientApp;

impl GarchClientApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context, now: AppInstant) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::same(10));
        SidePanel::left("control_panel")
            .exact_width(UI_CONFIG.side_panel_width)
            .resizable(false)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                ui.label_header(UI_TEXT.header);

                let health_enabled = self.controller.is_enabled(OperationKind::Health);
                let fit_enabled = self.controller.is_enabled(OperationKind::Fit);
                let predict_enabled = self.controller.is_enabled(OperationKind::Predict);

                let mut events = Vec::new();
                ScrollArea::vertical().id_salt("controls").show(ui, |ui| {
                    let form = self.controller.form_mut();
                    events.extend(ConnectionPanel::new(&mut form.base_url, health_enabled).render(ui));
                    events.extend(FitPanel::new(form, fit_enabled).render(ui));
                    events.extend(PredictPanel::new(form, predict_enabled).render(ui));
                });

                for event in events {
                    self.handle_control_event(event, now);
                }
            });
    }

    fn handle_control_event(&mut self, event: ControlEvent, now: AppInstant) {
        match event {
            ControlEvent::ApplyBaseUrl => {
                self.controller.apply_base_url();
            }
            ControlEvent::HealthClicked => self.controller.on_health_clicked(now),
            ControlEvent::FitClicked => {
                self.controller.on_fit_clicked(now);
            }
            ControlEvent::PredictClicked => {
                self.controller.on_predict_clicked(now);
            }
        }
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label_header(UI_TEXT.results_heading);
                    if self.controller.progress_visible() {
                        ui.add(Spinner::new());
                    }
                });
                ui.add_space(6.0);

                ScrollArea::vertical()
                    .id_salt("results")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        // Read-only: a &str buffer cannot be edited
                        let mut text = self.controller.results();
                        ui.add(
                            TextEdit::multiline(&mut text)
                                .font(TextStyle::Monospace)
                                .hint_text(UI_TEXT.results_placeholder)
                                .desired_width(f32::INFINITY)
                                .desired_rows(24),
                        );
                    });
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status = self.controller.status();
        let (fill, text_color) = match status.tone() {
            StatusTone::Neutral => (
                UI_CONFIG.colors.status_neutral,
                UI_CONFIG.colors.status_text_neutral,
            ),
            StatusTone::Positive => (
                UI_CONFIG.colors.status_positive,
                UI_CONFIG.colors.status_text_toned,
            ),
            StatusTone::Negative => (
                UI_CONFIG.colors.status_negative,
                UI_CONFIG.colors.status_text_toned,
            ),
        };

        let status_frame = Frame::new().fill(fill).inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(status.message()).color(text_color).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.metric(
                            UI_TEXT.active_server_label,
                            self.controller.active_base_url(),
                            text_color,
                        );
                    });
                });
            });
    }

    pub(super) fn render_warning_modal(&mut self, ctx: &Context) {
        let Some(message) = self.controller.warning().map(str::to_owned) else {
            return;
        };

        let mut dismissed = false;
        let response = Modal::new(Id::new("input_error")).show(ctx, |ui| {
            ui.set_max_width(320.0);
            ui.label_header(UI_TEXT.input_error_title);
            ui.add_space(6.0);
            ui.label_error(message);
            ui.add_space(10.0);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                dismissed = ui.button(UI_TEXT.ok_button).clicked();
            });
        });

        if dismissed || response.should_close() {
            self.controller.dismiss_warning();
        }
    }
}
