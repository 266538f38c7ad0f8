// Application state module
// Shared read-only state handed to every connection

use std::sync::Arc;

use super::types::{Config, HttpConfig};
use hyper::body::Bytes;

/// Application state
pub struct AppState {
    pub config: Config,

    // Response bodies are built once and shared by every request
    pub health_body: Bytes,
    pub greeting_body: Bytes,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let HttpConfig {
            health_body,
            greeting_body,
            ..
        } = &config.http;

        Self {
            config: config.clone(),
            health_body: Bytes::from(health_body.clone()),
            greeting_body: Bytes::from(greeting_body.clone()),
        }
    }

    pub fn shared(config: &Config) -> Arc<Self> {
        Arc::new(Self::new(config))
    }
}
