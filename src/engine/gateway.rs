use serde::Serialize;

use crate::config::API;
use crate::config::api::endpoint_url;
use crate::domain::{
    FitRequest, FitResult, ForecastResult, HealthResult, OperationKind, PredictRequest, decode_object,
};

use super::core::HttpClient;
use super::error::ApiError;
use super::messages::{Completion, HttpRequest};
use super::transport::Transport;

/// Terminal outcome of one gateway operation. Exactly one event is produced per
/// delivered request: a typed result, or an `Error`, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    Health(HealthResult),
    Fit(FitResult),
    Predict(ForecastResult),
    Error(ApiError),
}

/// Speaks the forecasting service's JSON on top of [`HttpClient`].
pub struct ApiGateway<T: Transport> {
    client: HttpClient<T>,
    base_url: String,
    /// Failures detected before anything reached the wire; delivered on the next poll
    deferred: Vec<ApiEvent>,
}

impl<T: Transport> ApiGateway<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            client: HttpClient::new(transport),
            base_url: base_url.into(),
            deferred: Vec::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Re-targets every later request. Requests already in flight are left alone.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
        log::info!("API base URL set to {}", self.base_url);
    }

    pub fn check_health(&mut self) {
        let url = endpoint_url(&self.base_url, API.endpoints.health);
        self.client.send(OperationKind::Health, HttpRequest::get(url));
    }

    pub fn fit_model(&mut self, request: &FitRequest) {
        self.post(OperationKind::Fit, API.endpoints.fit, request);
    }

    pub fn predict_volatility(&mut self, request: &PredictRequest) {
        self.post(OperationKind::Predict, API.endpoints.predict, request);
    }

    /// Drains finished operations into events. Non-blocking.
    pub fn poll(&mut self) -> Vec<ApiEvent> {
        let mut events = std::mem::take(&mut self.deferred);
        events.extend(self.client.poll().into_iter().map(decode));
        events
    }

    fn post<B: Serialize>(&mut self, kind: OperationKind, path: &str, body: &B) {
        match serde_json::to_string(body) {
            Ok(json) => {
                let url = endpoint_url(&self.base_url, path);
                self.client.send(kind, HttpRequest::post_json(url, json));
            }
            Err(err) => {
                log::error!("[{}] failed to encode request: {}", kind, err);
                self.deferred.push(ApiEvent::Error(ApiError::Encode {
                    operation: kind,
                    detail: err.to_string(),
                }));
            }
        }
    }
}

fn decode(completion: Completion) -> ApiEvent {
    let kind = completion.kind;
    let body = match completion.result {
        Ok(body) => body,
        Err(err) => return ApiEvent::Error(err),
    };

    let decoded = match kind {
        OperationKind::Health => decode_object::<HealthResult>(&body).map(ApiEvent::Health),
        OperationKind::Fit => decode_object::<FitResult>(&body).map(ApiEvent::Fit),
        OperationKind::Predict => ForecastResult::from_json(&body).map(ApiEvent::Predict),
    };

    decoded.unwrap_or_else(|err| {
        log::warn!("[{}] undecodable response: {}", kind, err);
        ApiEvent::Error(ApiError::Decode {
            operation: kind,
            detail: err.to_string(),
        })
    })
}
