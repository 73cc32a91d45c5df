use thiserror::Error;

use crate::domain::OperationKind;

/// Failures below the JSON layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("could not connect: {0}")]
    Connect(String),

    #[error("timed out")]
    Timeout,

    #[error("server answered HTTP {0}")]
    Status(u16),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Status(status.as_u16())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

/// Everything that travels on the gateway's error channel. The Display text is
/// what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{operation} request failed. Please ensure the API server is running. ({cause})")]
    Request {
        operation: OperationKind,
        cause: TransportError,
    },

    #[error("{operation} request could not be encoded: {detail}")]
    Encode {
        operation: OperationKind,
        detail: String,
    },

    #[error("{operation} returned an unreadable response: {detail}")]
    Decode {
        operation: OperationKind,
        detail: String,
    },
}

impl ApiError {
    pub fn operation(&self) -> OperationKind {
        match self {
            ApiError::Request { operation, .. }
            | ApiError::Encode { operation, .. }
            | ApiError::Decode { operation, .. } => *operation,
        }
    }
}
