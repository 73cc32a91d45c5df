use serde::{Deserialize, Serialize};

use crate::config::{API, FORM};
use crate::domain::{FitRequest, PredictRequest, ValidationError};

/// Everything the user can type or toggle. Persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    // Fit section
    pub fit_ticker: String,
    pub use_new_data: bool,
    pub n_observations: u32,
    pub p: u32,
    pub q: u32,

    // Predict section
    pub predict_ticker: String,
    pub n_days: u32,

    // Connection section (edited text; the gateway only changes on Apply)
    pub base_url: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            fit_ticker: FORM.default_ticker.to_string(),
            use_new_data: FORM.use_new_data,
            n_observations: FORM.n_observations.default,
            p: FORM.p.default,
            q: FORM.q.default,
            predict_ticker: FORM.default_ticker.to_string(),
            n_days: FORM.n_days.default,
            base_url: API.default_base_url.to_string(),
        }
    }
}

impl FormState {
    /// Pulls numeric fields back inside their ranges (saved state may predate a limit change)
    /// and restores an empty base URL to the default.
    pub fn sanitized(mut self) -> Self {
        self.n_observations = FORM.n_observations.clamp(self.n_observations);
        self.p = FORM.p.clamp(self.p);
        self.q = FORM.q.clamp(self.q);
        self.n_days = FORM.n_days.clamp(self.n_days);
        if self.base_url.trim().is_empty() {
            self.base_url = API.default_base_url.to_string();
        }
        self
    }

    pub fn fit_request(&self) -> Result<FitRequest, ValidationError> {
        FitRequest::new(
            &self.fit_ticker,
            self.use_new_data,
            self.n_observations,
            self.p,
            self.q,
        )
    }

    pub fn predict_request(&self) -> Result<PredictRequest, ValidationError> {
        PredictRequest::new(&self.predict_ticker, self.n_days)
    }
}
