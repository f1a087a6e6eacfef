use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use jokebox::cli::Cli;
use jokebox::joke::HttpJokeSource;
use jokebox::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("failed to load configuration")?;

    if let Err(err) = logging::init_tracing(&config.logging) {
        eprintln!("Warning: failed to initialise logging: {err}");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("jokebox-io")
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let source = HttpJokeSource::from_config(&config.api).context("failed to build HTTP client")?;
    tracing::info!(endpoint = %source.endpoint(), "Starting jokebox");

    ui::run(Arc::new(source), runtime.handle().clone()).context("terminal UI failed")?;

    runtime.shutdown_timeout(Duration::from_secs(1));
    Ok(())
}
