// Configuration module entry point
// Layered configuration: defaults, optional config file, environment

pub mod port;
mod state;
mod types;

use std::net::{IpAddr, SocketAddr};

use crate::error::ServerError;

// Re-export public types
pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

/// Config file looked up by [`Config::load`] (extension optional)
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Prefix for environment overrides, e.g. `HELLO_LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "HELLO";

impl Config {
    /// Load configuration from the default `config.toml`, if present
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The listen port always comes from `PORT` so the server and the
    /// health probe agree on it.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_layered(config_path, None)
    }

    /// Layered load; `vars` replaces the process environment when given
    fn load_layered(
        config_path: &str,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let listen_port = match &vars {
            Some(vars) => port::resolve(vars.get(port::PORT_ENV).map(String::as_str)),
            None => port::from_env(),
        };

        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", false)?
            .set_default("logging.access_log_format", "common")?
            .set_default("http.health_path", "/healthz")?
            .set_default("http.health_body", "ok\n")?
            .set_default("http.greeting_body", "hello from bun\n")?
            .set_default("http.content_type", "text/plain; charset=utf-8")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.connection_timeout", 30)?
            .set_override("server.port", i64::from(listen_port))?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|e| ServerError::Address(format!("{}: {e}", self.server.host)))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}
