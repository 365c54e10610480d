use std::sync::Arc;

use include_dir::{include_dir, Dir};

use embedsite::assets::{AssetRegistry, EmbeddedAssets};
use embedsite::config::{AppState, Config};
use embedsite::error::StartupError;
use embedsite::{logger, server};

/// Site content bundled into the binary at compile time.
static SITE: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/public");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    // Enumerate, load, and route every bundled file before anything binds;
    // a failure here aborts the process without serving traffic.
    let registry = AssetRegistry::build(&EmbeddedAssets::new(&SITE))?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg, registry))
}

async fn async_main(
    cfg: Config,
    registry: AssetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    for file in registry.iter() {
        logger::log_route_registered(&file.pattern, &file.path);
    }

    let listener =
        server::create_listener(addr).map_err(|source| StartupError::Bind { addr, source })?;

    logger::log_server_start(&addr, &cfg, registry.len());

    let state = Arc::new(AppState::new(cfg, registry));
    server::run(listener, state).await
}
