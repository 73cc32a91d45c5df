use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{FORM, IntField};

/// Local input problems. Never reaches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a ticker symbol.")]
    EmptyTicker,

    #[error("Please enter an http:// or https:// base URL (got \"{0}\").")]
    InvalidBaseUrl(String),

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

fn check_range(field: &'static str, value: u32, limits: &IntField) -> Result<u32, ValidationError> {
    if limits.contains(value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min: limits.min,
            max: limits.max,
        })
    }
}

fn check_ticker(raw: &str) -> Result<String, ValidationError> {
    let ticker = raw.trim();
    if ticker.is_empty() {
        return Err(ValidationError::EmptyTicker);
    }
    Ok(ticker.to_string())
}

/// Trims the base URL and checks it names an HTTP(S) server.
pub fn validate_base_url(raw: &str) -> Result<String, ValidationError> {
    let url = raw.trim().trim_end_matches('/');
    let has_host = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty());
    if has_host {
        Ok(url.to_string())
    } else {
        Err(ValidationError::InvalidBaseUrl(raw.trim().to_string()))
    }
}

/// Body of `POST /fit`.
///
/// Fields are private so a value can only come out of [`FitRequest::new`]
/// (or deserialization, used by tests) already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitRequest {
    ticker: String,
    use_new_data: bool,
    n_observations: u32,
    p: u32,
    q: u32,
}

impl FitRequest {
    pub fn new(
        ticker: &str,
        use_new_data: bool,
        n_observations: u32,
        p: u32,
        q: u32,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            ticker: check_ticker(ticker)?,
            use_new_data,
            n_observations: check_range("Observations", n_observations, &FORM.n_observations)?,
            p: check_range("P (GARCH)", p, &FORM.p)?,
            q: check_range("Q (ARCH)", q, &FORM.q)?,
        })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }
}

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    ticker: String,
    n_days: u32,
}

impl PredictRequest {
    pub fn new(ticker: &str, n_days: u32) -> Result<Self, ValidationError> {
        Ok(Self {
            ticker: check_ticker(ticker)?,
            n_days: check_range("Days Ahead", n_days, &FORM.n_days)?,
        })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fit_request_serializes_with_service_field_names() {
        let request = FitRequest::new("ABC", true, 2000, 2, 3).unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "ticker": "ABC",
                "use_new_data": true,
                "n_observations": 2000,
                "p": 2,
                "q": 3
            })
        );

        let text = serde_json::to_string(&request).unwrap();
        let back: FitRequest = serde_json::from_str(&text).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn ticker_is_trimmed_and_must_not_be_blank() {
        let request = FitRequest::new("  SHOPERSTOP.BSE \t", false, 100, 1, 1).unwrap();
        assert_eq!(request.ticker(), "SHOPERSTOP.BSE");

        assert_eq!(
            FitRequest::new("   ", false, 2000, 1, 1),
            Err(ValidationError::EmptyTicker)
        );
        assert_eq!(PredictRequest::new("", 5), Err(ValidationError::EmptyTicker));
    }

    #[test]
    fn numeric_inputs_outside_their_ranges_are_rejected() {
        assert!(matches!(
            FitRequest::new("ABC", false, 99, 1, 1),
            Err(ValidationError::OutOfRange { value: 99, min: 100, max: 10_000, .. })
        ));
        assert!(FitRequest::new("ABC", false, 10_000, 5, 5).is_ok());
        assert!(FitRequest::new("ABC", false, 2000, 0, 1).is_err());
        assert!(FitRequest::new("ABC", false, 2000, 1, 6).is_err());
        assert!(PredictRequest::new("ABC", 31).is_err());
        assert!(PredictRequest::new("ABC", 0).is_err());
    }

    #[test]
    fn base_url_must_be_http_with_a_host() {
        assert_eq!(
            validate_base_url(" http://localhost:8008/ "),
            Ok("http://localhost:8008".to_string())
        );
        assert!(validate_base_url("https://api.example.com").is_ok());
        assert!(validate_base_url("").is_err());
        assert!(validate_base_url("http://").is_err());
        assert_eq!(
            validate_base_url("localhost:8008"),
            Err(ValidationError::InvalidBaseUrl("localhost:8008".into()))
        );
    }

    #[test]
    fn predict_request_body_shape() {
        let request = PredictRequest::new("ABC", 7).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "ticker": "ABC", "n_days": 7 })
        );
    }
}
