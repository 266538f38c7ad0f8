//! Probe the local server's health route.
//!
//! Exits 0 when `GET http://127.0.0.1:$PORT/healthz` returns a success
//! status, 1 on any other status or failure.

use std::process::ExitCode;

use hello_server::config::port;
use hello_server::{logger, probe};

fn main() -> ExitCode {
    logger::init("warn");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            logger::log_error(&format!("Failed to start runtime: {e}"));
            return ExitCode::from(probe::Outcome::Unhealthy.exit_code());
        }
    };

    let outcome = runtime.block_on(probe::run(port::from_env()));
    ExitCode::from(outcome.exit_code())
}
