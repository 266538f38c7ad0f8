//! Error types for the server and the health probe

use std::net::SocketAddr;

use hyper::StatusCode;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid listen address {0}")]
    Address(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Health check failure
///
/// Every variant maps to the same exit code; the variants only exist so
/// the cause shows up in logs.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Invalid health check URL: {0}")]
    InvalidUrl(#[from] hyper::http::uri::InvalidUri),

    #[error("Health check request failed: {0}")]
    Request(#[from] hyper_util::client::legacy::Error),

    #[error("Health check returned {0}")]
    Unhealthy(StatusCode),
}
