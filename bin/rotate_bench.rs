use std::path::PathBuf;

use clap::Parser;
use rotate_forward::config::Config;
use rotate_forward::harness::Harness;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(version)]
pub struct Args {
    #[clap(short, long, env)]
    config: Option<PathBuf>,

    /// Write the full report as JSON
    #[clap(short, long)]
    output: Option<PathBuf>,
}

fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().pretty().compact())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut settings = config::Config::builder();

    if let Some(path) = args.config {
        let file = config::File::from(path).required(true);
        settings = settings.add_source(file);
    }

    let settings = settings
        .add_source(
            config::Environment::with_prefix("ROTATE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config = settings.try_deserialize::<Config>()?;

    let harness = Harness::new(config.bench)?;
    let report = harness.run()?;

    for m in &report.measurements {
        tracing::info!(
            size = m.size,
            split = m.split,
            new_mid = m.new_mid,
            first = m.first,
            elapsed = ?m.elapsed,
            "{}",
            m.algorithm
        );
    }

    for ((size, algorithm), elapsed) in report.totals() {
        tracing::info!(size, %algorithm, ?elapsed, "Total");
    }

    if let Some(output) = args.output {
        let json = serde_json::to_string_pretty(&report)?;

        std::fs::write(&output, json)?;

        tracing::info!(?output, "Wrote report");
    }

    Ok(())
}
