// Server module entry point
// Binding, accept loop and signal-driven shutdown

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the file is mounted as server_loop
#[path = "loop.rs"]
pub mod server_loop;

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::{AppState, Config};
use crate::error::ServerError;
use crate::logger;

pub use listener::create_reusable_listener;
pub use signal::Shutdown;

/// A bound application server
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    state: Arc<AppState>,
    shutdown: Arc<Shutdown>,
}

impl Server {
    /// Bind the listener described by `config`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn bind(config: &Config) -> Result<Self, ServerError> {
        let addr = config.socket_addr()?;
        let listener =
            create_reusable_listener(addr).map_err(|source| ServerError::Bind { addr, source })?;
        let local_addr = listener.local_addr()?;

        Ok(Self {
            listener,
            local_addr,
            state: AppState::shared(config),
            shutdown: Shutdown::new(),
        })
    }

    pub const fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Handle that stops the server when triggered
    pub fn shutdown_handle(&self) -> Arc<Shutdown> {
        Arc::clone(&self.shutdown)
    }

    /// Register SIGTERM/SIGINT handlers, then serve until one arrives
    pub async fn run_until_signal(self) {
        signal::listen(self.shutdown_handle());
        self.run().await;
    }

    /// Serve until the shutdown handle is triggered.
    ///
    /// Stopping is best-effort: the listener is closed and in-flight
    /// connections are aborted; failures inside connection tasks are
    /// discarded.
    pub async fn run(self) {
        logger::log_server_start(&self.local_addr);

        let aborted = server_loop::run(self.listener, self.state, self.shutdown).await;
        logger::log_server_stopped(aborted);
    }
}
