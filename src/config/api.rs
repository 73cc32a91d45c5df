//! Remote forecasting service configuration constants and types.

/// Paths of the three endpoints exposed by the service
pub struct ApiEndpoints {
    pub health: &'static str,
    pub fit: &'static str,
    pub predict: &'static str,
}

/// Settings handed to the HTTP transport when it is built
pub struct TransportSettings {
    /// Connect timeout for a single request (ms). The transport enforces nothing else.
    pub connect_timeout_ms: u64,
    pub user_agent: &'static str,
}

/// The Master API Configuration Struct
pub struct ApiConfig {
    /// Used when neither the CLI nor saved state provide a base URL
    pub default_base_url: &'static str,
    pub endpoints: ApiEndpoints,
    pub transport: TransportSettings,
}

pub const API: ApiConfig = ApiConfig {
    default_base_url: "http://localhost:8008",
    endpoints: ApiEndpoints {
        health: "/hello",
        fit: "/fit",
        predict: "/predict",
    },
    transport: TransportSettings {
        connect_timeout_ms: 5000,
        user_agent: concat!("garch-client/", env!("CARGO_PKG_VERSION")),
    },
};

/// Joins a base URL and an endpoint path without doubling the slash.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim().trim_end_matches('/'), path)
}
