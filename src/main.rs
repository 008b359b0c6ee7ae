use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use recordview::cli::Cli;
use recordview::config::Config;
use recordview::fixtures::{FixtureServer, RunningFixtures};
use recordview::logging::{init_tracing_stdout, init_tracing_to_file};
use recordview::prefetch::RecordStore;
use recordview::source::{RecordSource, RecordsClient};
use recordview::ui::nav::Route;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;
    cli.apply(&mut config);
    config.validate().context("Invalid config")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    if cli.is_serve() {
        init_tracing_stdout();
        return runtime.block_on(serve(&config));
    }

    init_tracing_to_file();

    // Embedded fixture server unless a backend was given.
    let fixtures = if config.client.base_url.is_empty() {
        let running = runtime
            .block_on(FixtureServer::spawn(&config.fixtures))
            .context("Failed to start fixture server")?;
        config.client.base_url = running.base_url.clone();
        Some(running)
    } else {
        None
    };

    let client = RecordsClient::new(&config.client).context("Failed to create HTTP client")?;
    tracing::info!(source = client.name(), base_url = client.base_url(), "record source ready");
    let store = RecordStore::new(Arc::new(client), config.cache.ttl());

    let initial = cli.initial_record().map(Route::Record).unwrap_or_default();

    let result = recordview::ui::runtime::run(
        store,
        initial,
        runtime.handle().clone(),
        config.ui.tick_rate(),
    );

    if let Some(running) = fixtures {
        runtime.block_on(stop_fixtures(running));
    }

    result.context("Terminal UI failed")
}

async fn serve(config: &Config) -> Result<()> {
    let mut server = FixtureServer::new(&config.fixtures);
    let (addr, base_url) = server.try_bind().await.context("Failed to bind fixture server")?;
    println!("Serving fixture records at {} (bound {})", base_url, addr);
    server.run().await.context("Fixture server failed")
}

async fn stop_fixtures(running: RunningFixtures) {
    let requests = running.log.paths().len();
    running.stop().await;
    tracing::info!(requests, "embedded fixture server stopped");
}
