//! Health probe
//!
//! Issues a single GET against the local server's health route and maps the
//! result to a process exit code. No retries and no timeout beyond the
//! transport defaults.

use http_body_util::Empty;
use hyper::body::Bytes;
use hyper::{StatusCode, Uri};
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::error::ProbeError;

/// Host the probe targets; the server listens on all interfaces
pub const HEALTH_HOST: &str = "127.0.0.1";

pub const HEALTH_PATH: &str = "/healthz";

/// Result of a health check as seen by the calling process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Healthy,
    Unhealthy,
}

impl Outcome {
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Healthy => 0,
            Self::Unhealthy => 1,
        }
    }
}

impl From<&Result<StatusCode, ProbeError>> for Outcome {
    fn from(result: &Result<StatusCode, ProbeError>) -> Self {
        if result.is_ok() {
            Self::Healthy
        } else {
            Self::Unhealthy
        }
    }
}

pub fn health_url(port: u16) -> String {
    format!("http://{HEALTH_HOST}:{port}{HEALTH_PATH}")
}

/// Request `url` once; any non-2xx status is an error
pub async fn check(url: &str) -> Result<StatusCode, ProbeError> {
    let uri: Uri = url.parse()?;
    let client = Client::builder(TokioExecutor::new()).build_http::<Empty<Bytes>>();

    let response = client.get(uri).await?;
    let status = response.status();
    if status.is_success() {
        Ok(status)
    } else {
        Err(ProbeError::Unhealthy(status))
    }
}

/// Probe the health route on `port` and report the outcome
pub async fn run(port: u16) -> Outcome {
    let url = health_url(port);
    let result = check(&url).await;

    match &result {
        Ok(status) => tracing::debug!(%url, %status, "Health check passed"),
        Err(e) => tracing::debug!(%url, error = %e, "Health check failed"),
    }

    Outcome::from(&result)
}
