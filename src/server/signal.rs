// Signal handling module
//
// Supported signals:
// - SIGTERM: Stop server
// - SIGINT:  Stop server (Ctrl+C)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Shutdown coordinator
///
/// Every signal source calls [`Shutdown::trigger`]; only the first call
/// requests the stop, later calls are no-ops.
#[derive(Debug, Default)]
pub struct Shutdown {
    notify: Notify,
    requested: AtomicBool,
}

impl Shutdown {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Request shutdown, returns `true` only for the call that performed it
    pub fn trigger(&self) -> bool {
        if self.requested.swap(true, Ordering::SeqCst) {
            return false;
        }
        // notify_one stores a permit, so a waiter that is not yet polling
        // still observes the request
        self.notify.notify_one();
        true
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Wait until shutdown has been requested
    pub async fn wait(&self) {
        if self.is_requested() {
            return;
        }
        self.notify.notified().await;
    }
}

// Signals are handled by a single task, so the check and the trigger
// cannot race with another signal
fn on_signal(shutdown: &Shutdown, name: &str) {
    if shutdown.is_requested() {
        logger::log_shutdown_repeated(name);
        return;
    }
    // Log first: the accept loop may stop the runtime right after trigger
    logger::log_shutdown_requested(name);
    shutdown.trigger();
}

/// Start signal handlers (Unix only)
///
/// | Signal  | Action      |
/// |---------|-------------|
/// | SIGTERM | Stop server |
/// | SIGINT  | Stop server |
///
/// A handler that fails to register is logged; the other one stays active.
#[cfg(unix)]
pub fn listen(shutdown: Arc<Shutdown>) {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => Some(s),
        Err(e) => {
            logger::log_warning(&format!("Failed to register SIGTERM handler: {e}"));
            None
        }
    };
    let mut sigint = match signal(SignalKind::interrupt()) {
        Ok(s) => Some(s),
        Err(e) => {
            logger::log_warning(&format!("Failed to register SIGINT handler: {e}"));
            None
        }
    };

    tokio::spawn(async move {
        loop {
            tokio::select! {
                Some(()) = recv(sigterm.as_mut()) => on_signal(&shutdown, "SIGTERM"),
                Some(()) = recv(sigint.as_mut()) => on_signal(&shutdown, "SIGINT"),
                else => break,
            }
        }
    });
}

#[cfg(unix)]
async fn recv(signal: Option<&mut tokio::signal::unix::Signal>) -> Option<()> {
    match signal {
        Some(s) => s.recv().await,
        None => None,
    }
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn listen(shutdown: Arc<Shutdown>) {
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            on_signal(&shutdown, "Ctrl+C");
        }
    });
}
