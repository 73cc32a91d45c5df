// Domain types and value objects
pub mod operation;
pub mod requests;
pub mod results;

// Re-export commonly used types
pub use operation::OperationKind;
pub use requests::{FitRequest, PredictRequest, ValidationError, validate_base_url};
pub use results::{FitResult, ForecastPoint, ForecastResult, HealthResult, decode_object};
