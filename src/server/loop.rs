// Server loop module
// Accepts connections until shutdown, then force-stops in-flight ones

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinSet;

use super::connection::serve_connection;
use super::signal::Shutdown;
use crate::config::AppState;
use crate::logger;

/// Accept loop
///
/// Each connection runs in its own task owned by a `JoinSet`. When
/// `shutdown` fires the listener is closed and every remaining connection
/// task is aborted. Returns the number of connections that were aborted.
#[allow(clippy::ignored_unit_patterns)]
pub async fn run(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Shutdown>) -> usize {
    let mut connections = JoinSet::new();

    loop {
        tokio::select! {
            biased;

            _ = shutdown.wait() => break,

            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connections.spawn(serve_connection(stream, peer_addr, Arc::clone(&state)));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            Some(joined) = connections.join_next(), if !connections.is_empty() => {
                if let Err(e) = joined {
                    logger::log_warning(&format!("Connection task failed: {e}"));
                }
            }
        }
    }

    drop(listener);

    let in_flight = connections.len();
    connections.shutdown().await;
    in_flight
}
