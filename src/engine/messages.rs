use strum_macros::Display;

use crate::domain::OperationKind;

use super::error::{ApiError, TransportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HttpMethod {
    #[strum(to_string = "GET")]
    Get,
    #[strum(to_string = "POST")]
    Post,
}

/// A fully resolved request handed to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Pre-encoded JSON; sent with `Content-Type: application/json`
    pub json_body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            json_body: None,
        }
    }

    pub fn post_json(url: impl Into<String>, body: String) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            json_body: Some(body),
        }
    }
}

/// Raw answer from the transport. Status is checked by the client, the body is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub type TransportResult = Result<HttpResponse, TransportError>;

/// The result returned by the client for the current request of a kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub kind: OperationKind,
    pub generation: u64,
    // Success: the raw body
    // Failure: transport error tagged with the operation
    pub result: Result<String, ApiError>,
}
