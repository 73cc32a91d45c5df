//! Request engine: per-operation in-flight slots over an async HTTP transport,
//! and the gateway that speaks the forecasting service's JSON.

pub mod core;
pub mod error;
pub mod gateway;
pub mod messages;
pub mod state;
pub mod transport;

// Re-export key components
pub use self::core::HttpClient;
pub use error::{ApiError, TransportError};
pub use gateway::{ApiEvent, ApiGateway};
pub use messages::{Completion, HttpMethod, HttpRequest, HttpResponse, TransportResult};
pub use transport::{Dispatched, ReqwestTransport, Transport};
