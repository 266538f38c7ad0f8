//! Logger module
//!
//! Provides logging utilities for the HTTP server including:
//! - Subscriber setup (`tracing-subscriber`, stdout)
//! - Server lifecycle logging
//! - Access logging in common or JSON format

mod format;

pub use format::AccessLogEntry;

use std::io::IsTerminal;
use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

/// Target used for access log events
pub const ACCESS_TARGET: &str = "access";

/// Initialize the global subscriber
///
/// `RUST_LOG` takes precedence over `level`. A second call keeps the
/// subscriber installed by the first one.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .try_init();
}

/// Announce the bound address on stdout, regardless of the log filter
pub fn log_server_start(addr: &SocketAddr) {
    println!("listening on {addr}");
}

pub fn log_runtime_workers(workers: Option<usize>) {
    match workers {
        Some(workers) => tracing::debug!(workers, "Using configured worker threads"),
        None => tracing::debug!("Using default worker threads (CPU cores)"),
    }
}

pub fn log_shutdown_requested(signal: &str) {
    tracing::info!(signal, "Shutdown requested, stopping server");
}

pub fn log_shutdown_repeated(signal: &str) {
    tracing::debug!(signal, "Shutdown already in progress, ignoring signal");
}

pub fn log_server_stopped(aborted_connections: usize) {
    tracing::info!(aborted_connections, "Server stopped");
}

pub fn log_connection_error(err: &impl std::fmt::Display) {
    tracing::debug!(error = %err, "Failed to serve connection");
}

pub fn log_error(message: &str) {
    tracing::error!("{message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("{message}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    tracing::info!(target: ACCESS_TARGET, "{}", entry.format(format));
}
