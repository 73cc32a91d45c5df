use std::collections::HashSet;
use std::time::Duration;
#[cfg(debug_assertions)]
use strum::IntoEnumIterator;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{OperationKind, ValidationError, validate_base_url};
use crate::engine::{ApiEvent, ApiGateway, Transport};
use crate::ui::config::UI_TEXT;
use crate::ui::form::FormState;
use crate::ui::results::{error_report, fit_report, forecast_report, health_report};
use crate::ui::status::{StatusLine, StatusTone};
use crate::utils::app_time::AppInstant;

/// How often the UI wakes up while a request is outstanding.
const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Owns the form, the busy state of the three action buttons, the results text
/// and the status line, and drives the gateway from user actions.
///
/// Toolkit-free: the egui layer reads state from here and forwards clicks.
pub struct UiController<T: Transport> {
    gateway: ApiGateway<T>,
    form: FormState,
    /// Buttons currently disabled while their request runs
    busy: HashSet<OperationKind>,
    results: String,
    status: StatusLine,
    /// Blocking validation message; while set the UI shows a modal
    warning: Option<String>,
}

impl<T: Transport> UiController<T> {
    /// Builds the controller and immediately runs one health check.
    ///
    /// `base_url_override` only targets the gateway; the form keeps its own
    /// base URL so the override is never persisted.
    pub fn new(
        transport: T,
        form: FormState,
        base_url_override: Option<&str>,
        now: AppInstant,
    ) -> Self {
        let form = form.sanitized();
        let requested = base_url_override.unwrap_or(&form.base_url);
        let base_url = validate_base_url(requested).unwrap_or_else(|err| {
            log::warn!("{}", err);
            crate::config::API.default_base_url.to_string()
        });

        let mut controller = Self {
            gateway: ApiGateway::new(transport, base_url),
            form,
            busy: HashSet::new(),
            results: String::new(),
            status: StatusLine::default(),
            warning: None,
        };
        controller.on_health_clicked(now);
        controller
    }

    // --- STATE FOR THE VIEW ---

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn results(&self) -> &str {
        &self.results
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }

    pub fn is_busy(&self, kind: OperationKind) -> bool {
        self.busy.contains(&kind)
    }

    pub fn is_enabled(&self, kind: OperationKind) -> bool {
        !self.is_busy(kind)
    }

    /// The indeterminate progress indicator shows while any action is busy.
    pub fn progress_visible(&self) -> bool {
        !self.busy.is_empty()
    }

    /// Base URL requests are currently sent to (may differ from the edited text).
    pub fn active_base_url(&self) -> &str {
        self.gateway.base_url()
    }

    /// When the UI must wake up next even without input.
    pub fn repaint_after(&self, now: AppInstant) -> Option<Duration> {
        if self.progress_visible() {
            Some(BUSY_REPAINT_INTERVAL)
        } else {
            self.status.time_until_revert(now)
        }
    }

    // --- USER ACTIONS ---

    /// Returns true if a request was sent.
    pub fn on_fit_clicked(&mut self, now: AppInstant) -> bool {
        if self.is_busy(OperationKind::Fit) {
            return false;
        }
        let request = match self.form.fit_request() {
            Ok(request) => request,
            Err(err) => {
                self.block_with_warning(err);
                return false;
            }
        };

        log::info!("Training model for {}", request.ticker());
        self.begin(OperationKind::Fit, UI_TEXT.status_training, now);
        self.gateway.fit_model(&request);
        true
    }

    /// Returns true if a request was sent.
    pub fn on_predict_clicked(&mut self, now: AppInstant) -> bool {
        if self.is_busy(OperationKind::Predict) {
            return false;
        }
        let request = match self.form.predict_request() {
            Ok(request) => request,
            Err(err) => {
                self.block_with_warning(err);
                return false;
            }
        };

        log::info!("Requesting forecast for {}", request.ticker());
        self.begin(OperationKind::Predict, UI_TEXT.status_predicting, now);
        self.gateway.predict_volatility(&request);
        true
    }

    pub fn on_health_clicked(&mut self, now: AppInstant) {
        if self.is_busy(OperationKind::Health) {
            return;
        }
        self.begin(OperationKind::Health, UI_TEXT.status_checking, now);
        self.gateway.check_health();
    }

    /// Points later requests at the edited base URL.
    pub fn apply_base_url(&mut self) -> bool {
        match validate_base_url(&self.form.base_url) {
            Ok(url) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("[ui] base URL applied: {}", url);
                }
                self.form.base_url = url.clone();
                self.gateway.set_base_url(url);
                true
            }
            Err(err) => {
                self.block_with_warning(err);
                false
            }
        }
    }

    // --- EVENT LOOP ---

    /// Delivers finished requests and expires the status tone. Call once per frame.
    pub fn poll(&mut self, now: AppInstant) {
        for event in self.gateway.poll() {
            self.apply_event(event, now);
        }
        self.status.tick(now);
    }

    /// Puts every action button back to Idle and hides the progress indicator.
    pub fn reset_all_busy_indicators(&mut self) {
        self.busy.clear();
    }

    fn begin(&mut self, kind: OperationKind, working_message: &str, now: AppInstant) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("[ui] {} started", kind);
        }
        self.busy.insert(kind);
        self.results.clear();
        self.status.set(working_message, StatusTone::Neutral, now);
    }

    fn finish(&mut self, kind: OperationKind) {
        self.busy.remove(&kind);
        // A completed fit/predict also frees the health button.
        self.busy.remove(&OperationKind::Health);
    }

    fn block_with_warning(&mut self, err: ValidationError) {
        log::warn!("Input rejected: {}", err);
        self.warning = Some(err.to_string());
    }

    fn apply_event(&mut self, event: ApiEvent, now: AppInstant) {
        match event {
            ApiEvent::Fit(result) => {
                self.finish(OperationKind::Fit);
                self.results = fit_report(&result);
                if result.success {
                    log::info!("Model trained for {}: {}", result.ticker, result.message);
                    self.status.set(UI_TEXT.status_fit_ok, StatusTone::Positive, now);
                } else {
                    self.status.set(
                        format!("{}{}", UI_TEXT.status_fit_failed_prefix, result.message),
                        StatusTone::Negative,
                        now,
                    );
                }
            }
            ApiEvent::Predict(result) => {
                self.finish(OperationKind::Predict);
                self.results = forecast_report(&result);
                if result.success {
                    log::info!("Forecast received ({} days)", result.forecast.len());
                    self.status.set(UI_TEXT.status_predict_ok, StatusTone::Positive, now);
                } else {
                    self.status.set(
                        format!("{}{}", UI_TEXT.status_predict_failed_prefix, result.message),
                        StatusTone::Negative,
                        now,
                    );
                }
            }
            ApiEvent::Health(result) => {
                self.reset_all_busy_indicators();
                self.results = health_report(&result);
                self.status.set(UI_TEXT.status_health_ok, StatusTone::Positive, now);
            }
            ApiEvent::Error(err) => {
                log::error!("[{}] {}", err.operation(), err);
                self.reset_all_busy_indicators();
                let text = err.to_string();
                self.results = error_report(&text);
                self.status.set(
                    format!("{}{}", UI_TEXT.status_error_prefix, text),
                    StatusTone::Negative,
                    now,
                );
            }
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            let busy: Vec<String> = OperationKind::iter()
                .filter(|kind| self.is_busy(*kind))
                .map(|kind| kind.to_string())
                .collect();
            log::info!("[ui] busy after event: {:?}", busy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TransportError;
    use crate::engine::transport::fake::FakeTransport;
    use crate::utils::app_time::now;
    use strum::IntoEnumIterator;

    const FIT_OK: &str = r#"{"success":true,"message":"trained","ticker":"ABC","n_observations":2000,"p":1,"q":1,"use_new_data":false}"#;

    /// Controller whose startup health check already succeeded (request #0).
    fn ready_controller() -> (UiController<FakeTransport>, FakeTransport) {
        let transport = FakeTransport::default();
        let mut controller = UiController::new(transport.clone(), FormState::default(), None, now());
        transport.respond(0, 200, r#"{"message":"Hello from GARCH API!"}"#);
        controller.poll(now());
        (controller, transport)
    }

    #[test]
    fn construction_runs_one_health_check() {
        let transport = FakeTransport::default();
        let controller = UiController::new(transport.clone(), FormState::default(), None, now());

        assert_eq!(transport.request_count(), 1);
        assert_eq!(transport.request(0).url, "http://localhost:8008/hello");
        assert!(controller.is_busy(OperationKind::Health));
        assert!(controller.progress_visible());
        assert_eq!(controller.status().message(), UI_TEXT.status_checking);
    }

    #[test]
    fn healthy_startup_renders_connected() {
        let (controller, _) = ready_controller();
        assert!(controller.results().contains("✓ Connected"));
        assert!(controller.results().contains("Hello from GARCH API!"));
        assert_eq!(controller.status().tone(), StatusTone::Positive);
        assert!(!controller.progress_visible());
    }

    #[test]
    fn blank_ticker_blocks_without_any_request() {
        let (mut controller, transport) = ready_controller();
        controller.form_mut().fit_ticker = "   ".into();
        controller.form_mut().predict_ticker = String::new();

        assert!(!controller.on_fit_clicked(now()));
        assert_eq!(controller.warning(), Some("Please enter a ticker symbol."));
        controller.dismiss_warning();
        assert!(!controller.on_predict_clicked(now()));
        assert!(controller.warning().is_some());

        assert_eq!(transport.request_count(), 1);
        assert!(controller.is_enabled(OperationKind::Fit));
        assert!(controller.is_enabled(OperationKind::Predict));
        assert!(!controller.progress_visible());
    }

    #[test]
    fn successful_fit_end_to_end() {
        let (mut controller, transport) = ready_controller();
        controller.form_mut().fit_ticker = "ABC".into();

        assert!(controller.on_fit_clicked(now()));
        assert!(controller.is_busy(OperationKind::Fit));
        assert_eq!(controller.results(), "");
        assert_eq!(controller.status().message(), "Training model...");

        transport.respond(1, 200, FIT_OK);
        controller.poll(now());

        let results = controller.results();
        assert!(results.contains("Ticker: ABC"));
        assert!(results.contains("Observations: 2000"));
        assert!(results.contains("GARCH(p=1, q=1)"));
        assert!(results.contains("Use New Data: No"));
        assert!(controller.status().message().contains("trained"));
        assert_eq!(controller.status().tone(), StatusTone::Positive);
        assert!(controller.is_enabled(OperationKind::Fit));
    }

    #[test]
    fn application_failure_is_a_normal_negative_result() {
        let (mut controller, transport) = ready_controller();
        controller.on_predict_clicked(now());
        transport.respond(1, 200, r#"{"success":false,"message":"no model for ticker","forecast":{}}"#);
        controller.poll(now());

        assert!(controller.results().contains("Message: no model for ticker"));
        assert!(!controller.results().contains("Day "));
        assert_eq!(controller.status().message(), "Prediction failed: no model for ticker");
        assert_eq!(controller.status().tone(), StatusTone::Negative);
        assert!(controller.is_enabled(OperationKind::Predict));
    }

    #[test]
    fn superseded_fit_never_renders() {
        let (mut controller, transport) = ready_controller();
        controller.form_mut().fit_ticker = "OLD".into();
        assert!(controller.on_fit_clicked(now()));

        // A health check completing frees every button, so fit can be clicked again.
        controller.on_health_clicked(now());
        transport.respond(2, 200, r#"{"message":"ok"}"#);
        controller.poll(now());
        assert!(controller.is_enabled(OperationKind::Fit));

        controller.form_mut().fit_ticker = "ABC".into();
        assert!(controller.on_fit_clicked(now()));
        assert!(transport.was_aborted(1));

        transport.respond(1, 200, &FIT_OK.replace("ABC", "OLD"));
        controller.poll(now());
        assert_eq!(controller.results(), "");

        transport.respond(3, 200, FIT_OK);
        controller.poll(now());
        assert!(controller.results().contains("Ticker: ABC"));
        assert!(!controller.results().contains("OLD"));
    }

    #[test]
    fn health_transport_failure_renders_error_and_frees_buttons() {
        let transport = FakeTransport::default();
        let mut controller = UiController::new(transport.clone(), FormState::default(), None, now());
        transport.fail(0, TransportError::Connect("connection refused".into()));
        controller.poll(now());

        assert!(controller.results().starts_with("=== Error ==="));
        assert!(controller.results().contains("Please ensure the API server is running."));
        assert!(controller.status().message().starts_with("Error: Health Check request failed."));
        assert_eq!(controller.status().tone(), StatusTone::Negative);
        assert!(controller.is_enabled(OperationKind::Health));
        assert!(!controller.progress_visible());
    }

    #[test]
    fn any_error_resets_every_busy_action() {
        let (mut controller, transport) = ready_controller();
        controller.on_fit_clicked(now());
        controller.on_predict_clicked(now());
        assert!(controller.is_busy(OperationKind::Fit) && controller.is_busy(OperationKind::Predict));

        transport.respond(2, 502, "bad gateway");
        controller.poll(now());

        for kind in OperationKind::iter() {
            assert!(controller.is_enabled(kind), "{kind} still busy");
        }
        assert!(controller.results().contains("Predict request failed."));
    }

    #[test]
    fn fit_completion_frees_health_but_not_predict() {
        let (mut controller, transport) = ready_controller();
        controller.on_fit_clicked(now());
        controller.on_predict_clicked(now());
        controller.on_health_clicked(now());

        transport.respond(1, 200, FIT_OK);
        controller.poll(now());

        assert!(controller.is_enabled(OperationKind::Fit));
        assert!(controller.is_enabled(OperationKind::Health));
        assert!(controller.is_busy(OperationKind::Predict));
        assert!(controller.progress_visible());
    }

    #[test]
    fn reset_all_busy_indicators_clears_everything() {
        let (mut controller, _) = ready_controller();
        controller.on_fit_clicked(now());
        controller.on_predict_clicked(now());
        controller.on_health_clicked(now());

        controller.reset_all_busy_indicators();
        assert!(OperationKind::iter().all(|kind| controller.is_enabled(kind)));
        assert!(!controller.progress_visible());
    }

    #[test]
    fn base_url_changes_apply_only_when_valid() {
        let (mut controller, transport) = ready_controller();

        controller.form_mut().base_url = "ftp://nowhere".into();
        assert!(!controller.apply_base_url());
        assert!(controller.warning().is_some());
        assert_eq!(controller.active_base_url(), "http://localhost:8008");
        controller.dismiss_warning();

        controller.form_mut().base_url = "http://10.1.1.1:9000/".into();
        assert!(controller.apply_base_url());
        controller.on_health_clicked(now());
        assert_eq!(transport.request(1).url, "http://10.1.1.1:9000/hello");
    }

    #[test]
    fn repaint_is_requested_while_busy_and_until_tone_reverts() {
        let transport = FakeTransport::default();
        let start = now();
        let mut controller = UiController::new(transport.clone(), FormState::default(), None, start);
        assert_eq!(controller.repaint_after(start), Some(BUSY_REPAINT_INTERVAL));

        transport.respond(0, 200, "{}");
        controller.poll(start);
        assert_eq!(controller.repaint_after(start), Some(Duration::from_secs(3)));

        controller.poll(start + Duration::from_secs(3));
        assert_eq!(controller.status().tone(), StatusTone::Neutral);
        assert_eq!(controller.repaint_after(start + Duration::from_secs(3)), None);
    }

    #[test]
    fn command_line_base_url_targets_requests_but_is_not_saved() {
        let transport = FakeTransport::default();
        let form = FormState {
            base_url: "http://saved.example:8008".into(),
            ..FormState::default()
        };

        let controller = UiController::new(transport.clone(), form, Some("http://override:1/"), now());

        assert_eq!(transport.request(0).url, "http://override:1/hello");
        assert_eq!(controller.active_base_url(), "http://override:1");
        assert_eq!(controller.form().base_url, "http://saved.example:8008");
    }

    #[test]
    fn invalid_override_falls_back_to_the_default_url() {
        let transport = FakeTransport::default();
        let controller = UiController::new(transport.clone(), FormState::default(), Some("nope"), now());

        assert_eq!(transport.request(0).url, "http://localhost:8008/hello");
        assert_eq!(controller.form().base_url, "http://localhost:8008");
    }
}
