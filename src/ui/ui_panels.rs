use eframe::egui::{Checkbox, DragValue, Grid, TextEdit, Ui};

use crate::config::FORM;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::form::FormState;
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{section_heading, spaced_separator};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// User intents raised by the control panels. The app forwards them to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    ApplyBaseUrl,
    HealthClicked,
    FitClicked,
    PredictClicked,
}

/// Server address and the manual health check
pub struct ConnectionPanel<'a> {
    base_url: &'a mut String,
    health_enabled: bool,
}

impl<'a> ConnectionPanel<'a> {
    pub fn new(base_url: &'a mut String, health_enabled: bool) -> Self {
        Self {
            base_url,
            health_enabled,
        }
    }
}

impl Panel for ConnectionPanel<'_> {
    type Event = ControlEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<ControlEvent> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.server_heading);

        ui.label(UI_TEXT.base_url_label);
        ui.horizontal(|ui| {
            let field = ui.add(
                TextEdit::singleline(&mut *self.base_url).desired_width(ui.available_width() - 60.0),
            );
            let entered = field.lost_focus() && ui.input(|i| i.key_pressed(eframe::egui::Key::Enter));
            if ui.button(UI_TEXT.apply_base_url).clicked() || entered {
                events.push(ControlEvent::ApplyBaseUrl);
            }
        });

        ui.add_space(6.0);
        if ui.action_button(
            self.health_enabled,
            UI_TEXT.health_button,
            UI_CONFIG.colors.health_button,
        ) {
            events.push(ControlEvent::HealthClicked);
        }

        events
    }
}

/// Inputs and trigger for model training
pub struct FitPanel<'a> {
    form: &'a mut FormState,
    enabled: bool,
}

impl<'a> FitPanel<'a> {
    pub fn new(form: &'a mut FormState, enabled: bool) -> Self {
        Self { form, enabled }
    }
}

impl Panel for FitPanel<'_> {
    type Event = ControlEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<ControlEvent> {
        let mut events = Vec::new();
        spaced_separator(ui);
        section_heading(ui, UI_TEXT.fit_heading);

        Grid::new("fit_grid")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label(UI_TEXT.ticker_label);
                ui.add(TextEdit::singleline(&mut self.form.fit_ticker).hint_text(UI_TEXT.ticker_hint));
                ui.end_row();

                ui.label("");
                ui.add(Checkbox::new(&mut self.form.use_new_data, UI_TEXT.use_new_data_label));
                ui.end_row();

                ui.label(UI_TEXT.observations_label);
                ui.add(
                    DragValue::new(&mut self.form.n_observations)
                        .range(FORM.n_observations.range())
                        .speed(10.0),
                );
                ui.end_row();

                ui.label(UI_TEXT.p_label);
                ui.add(DragValue::new(&mut self.form.p).range(FORM.p.range()));
                ui.end_row();

                ui.label(UI_TEXT.q_label);
                ui.add(DragValue::new(&mut self.form.q).range(FORM.q.range()));
                ui.end_row();
            });

        ui.add_space(6.0);
        if ui.action_button(self.enabled, UI_TEXT.fit_button, UI_CONFIG.colors.fit_button) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Fit clicked for '{}'", self.form.fit_ticker);
            }
            events.push(ControlEvent::FitClicked);
        }

        events
    }
}

/// Inputs and trigger for the volatility forecast
pub struct PredictPanel<'a> {
    form: &'a mut FormState,
    enabled: bool,
}

impl<'a> PredictPanel<'a> {
    pub fn new(form: &'a mut FormState, enabled: bool) -> Self {
        Self { form, enabled }
    }
}

impl Panel for PredictPanel<'_> {
    type Event = ControlEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<ControlEvent> {
        let mut events = Vec::new();
        spaced_separator(ui);
        section_heading(ui, UI_TEXT.predict_heading);

        Grid::new("predict_grid")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label(UI_TEXT.ticker_label);
                ui.add(
                    TextEdit::singleline(&mut self.form.predict_ticker).hint_text(UI_TEXT.ticker_hint),
                );
                ui.end_row();

                ui.label(UI_TEXT.days_label);
                ui.add(DragValue::new(&mut self.form.n_days).range(FORM.n_days.range()));
                ui.end_row();
            });

        ui.add_space(6.0);
        if ui.action_button(self.enabled, UI_TEXT.predict_button, UI_CONFIG.colors.predict_button) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Predict clicked for '{}'", self.form.predict_ticker);
            }
            events.push(ControlEvent::PredictClicked);
        }

        events
    }
}
