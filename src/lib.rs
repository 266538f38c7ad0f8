//! hello-server: a minimal HTTP server and its health probe.
//!
//! The server answers `/healthz` with `ok` and every other path with a
//! greeting, and stops on SIGTERM/SIGINT. The `healthcheck` binary probes
//! the health route and turns the result into an exit code.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod probe;
pub mod server;

pub use self::config::Config;
pub use error::{ProbeError, ServerError};
pub use server::Server;
