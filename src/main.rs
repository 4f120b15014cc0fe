mod api;
mod clock;
mod config;
mod descriptor;
mod handler;
mod http;
mod logger;
mod server;

use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    // Descriptor synthesis must complete before the listener accepts
    // traffic, otherwise early discovery requests would see spurious 404s.
    let store = descriptor::ensure_descriptors(&cfg).await?;

    let state = Arc::new(config::AppState::new(cfg, store));
    let listener = server::create_listener(addr)?;

    logger::log_server_start(&addr, &state.config);
    server::run(listener, state).await
}
