use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use postboard::cli::Cli;
use postboard::logging::init_tracing;
use postboard::posts::PostFetcher;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("Failed to load configuration")?;
    init_tracing(&config.logging, cli.verbose, &cli.log_target(&config))?;
    tracing::debug!(url = %config.source.url, plain = cli.plain, "Starting postboard");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let fetcher = PostFetcher::new(&config.source)?;

    let result = if cli.plain {
        runtime
            .block_on(postboard::plain::run(&fetcher))
            .map(|_| ())
            .map_err(anyhow::Error::from)
    } else {
        postboard::ui::runtime::run(&config, Arc::new(fetcher), runtime.handle().clone())
            .context("Terminal UI failed")
    };

    runtime.shutdown_timeout(Duration::from_secs(1));
    result
}
