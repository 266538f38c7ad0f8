use hello_server::{logger, Config, Server, ServerError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg.logging.level);

    // Worker thread count follows server.workers when set
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    let workers = cfg.server.workers.filter(|w| *w > 0);
    if let Some(workers) = workers {
        runtime_builder.worker_threads(workers);
    }
    logger::log_runtime_workers(workers);

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))?;
    Ok(())
}

async fn async_main(cfg: Config) -> Result<(), ServerError> {
    let server = Server::bind(&cfg)?;
    server.run_until_signal().await;
    Ok(())
}
