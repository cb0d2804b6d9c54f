use anyhow::Context;
use clap::Parser;
use conversion_metrics::core::ConfigProvider;
use conversion_metrics::utils::{logger, validation::Validate};
use conversion_metrics::{CliConfig, LocalStorage, MetricsEngine, SheetPipeline, TomlConfig};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting conversion-metrics");

    if let Some(path) = cli.config.clone() {
        let config = TomlConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path.display()))?;
        run(config).await
    } else {
        run(cli).await
    }
}

async fn run<C>(config: C) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate,
{
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let poll_secs = config.poll_interval_secs();
    let storage = LocalStorage::new(config.output_path());
    let pipeline = SheetPipeline::new(storage, config);
    let engine = MetricsEngine::new(pipeline);

    let output_path = engine.run().await?;
    println!("Report written to {}", output_path);

    if poll_secs > 0 {
        tracing::info!("Refreshing every {}s; Ctrl-C to stop", poll_secs);
        let mut ticker = tokio::time::interval(Duration::from_secs(poll_secs));
        ticker.tick().await; // the first tick resolves immediately

        loop {
            ticker.tick().await;
            // A failed refresh leaves the previous report in place; the
            // next tick recomputes from scratch.
            if let Err(e) = engine.run().await {
                tracing::error!("Refresh failed: {}", e);
            }
        }
    }

    Ok(())
}
