use eframe::{Frame, egui};

use crate::config::FORM_STATE_KEY;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::engine::ReqwestTransport;
use crate::ui::controller::UiController;
use crate::ui::form::FormState;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::now;

/// The desktop shell: owns the controller and draws it every frame.
pub struct GarchClientApp {
    pub(super) controller: UiController<ReqwestTransport>,
}

impl GarchClientApp {
    /// Restores the last form from storage (if any) and starts the controller,
    /// which fires the startup health check.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        transport: ReqwestTransport,
        base_url_override: Option<String>,
    ) -> Self {
        let form: FormState = match cc.storage {
            Some(storage) => match eframe::get_value(storage, FORM_STATE_KEY) {
                Some(form) => {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_state_serde {
                        log::info!("Successfully loaded persisted form state");
                    }
                    form
                }
                None => FormState::default(),
            },
            None => FormState::default(),
        };

        if let Some(base_url) = &base_url_override {
            log::info!("Base URL overridden on the command line: {}", base_url);
        }

        setup_custom_visuals(&cc.egui_ctx);

        Self {
            controller: UiController::new(transport, form, base_url_override.as_deref(), now()),
        }
    }
}

impl eframe::App for GarchClientApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("Saving form state");
        }
        eframe::set_value(storage, FORM_STATE_KEY, self.controller.form());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now = now();
        self.controller.poll(now);

        // Panels before the central panel so it takes the remaining space
        self.render_status_panel(ctx);
        self.render_side_panel(ctx, now);
        self.render_central_panel(ctx);
        self.render_warning_modal(ctx);

        if let Some(delay) = self.controller.repaint_after(now) {
            ctx.request_repaint_after(delay);
        }
    }
}
