//! Typed response bodies. Decoded once at the gateway boundary; the UI never
//! sees raw JSON.

use std::collections::HashMap;

use itertools::Itertools;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Decodes a body that must be a JSON object. Derived struct deserializers
/// also accept a positional array, which the service never sends.
pub fn decode_object<T: DeserializeOwned>(body: &str) -> serde_json::Result<T> {
    let object: Map<String, Value> = serde_json::from_str(body)?;
    serde_json::from_value(Value::Object(object))
}

/// Missing and `null` both fall back to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET /hello`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HealthResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

/// Body of `POST /fit`. The echoed request fields only mean something when
/// `success` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FitResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ticker: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub n_observations: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub p: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub q: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub use_new_data: bool,
}

/// One forecast horizon step as sent by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    /// Day label exactly as received ("1", "2", ... or whatever the service emits)
    pub label: String,
    /// Predicted volatility as a fraction (0.0123 == 1.23%)
    pub volatility: f64,
}

impl ForecastPoint {
    /// Integer day labels first, in numeric order of any magnitude; anything
    /// else after them in label order.
    fn order_key(&self) -> (bool, usize, &str, &str) {
        let label = self.label.trim();
        if !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit()) {
            let digits = label.trim_start_matches('0');
            (false, digits.len(), digits, self.label.as_str())
        } else {
            (true, 0, "", self.label.as_str())
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PredictPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    forecast: HashMap<String, f64>,
}

/// Body of `POST /predict`, with the forecast mapping flattened into a
/// sequence ordered by day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastResult {
    pub success: bool,
    pub message: String,
    pub forecast: Vec<ForecastPoint>,
}

impl ForecastResult {
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        let payload: PredictPayload = decode_object(body)?;
        Ok(Self::from_payload(payload))
    }

    fn from_payload(payload: PredictPayload) -> Self {
        let forecast = payload
            .forecast
            .into_iter()
            .map(|(label, volatility)| ForecastPoint { label, volatility })
            .sorted_by(|a, b| a.order_key().cmp(&b.order_key()))
            .collect();

        Self {
            success: payload.success,
            message: payload.message,
            forecast,
        }
    }
}
