// Connection handling module
// Serves a single accepted TCP connection over HTTP/1.1

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Serve one connection until the client closes it or the timeout expires.
///
/// Connection errors are logged, never returned: a broken client must not
/// affect the accept loop.
pub async fn serve_connection(stream: TcpStream, peer_addr: SocketAddr, state: Arc<AppState>) {
    let io = TokioIo::new(stream);
    let timeout_secs = state.config.performance.connection_timeout;

    let mut builder = http1::Builder::new();
    builder.keep_alive(state.config.performance.keep_alive);

    let conn = builder.serve_connection(
        io,
        service_fn(move |req| handler::handle_request(req, Arc::clone(&state), peer_addr)),
    );

    if timeout_secs == 0 {
        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
        return;
    }

    match tokio::time::timeout(Duration::from_secs(timeout_secs), conn).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => logger::log_connection_error(&err),
        Err(_) => {
            logger::log_warning(&format!(
                "Connection from {peer_addr} timed out after {timeout_secs} seconds"
            ));
        }
    }
}
