use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use locsync_core::{routing, sync, SyncConfig};

/// Synchronize iOS `.strings` catalogs from Android string resources.
#[derive(Debug, Parser)]
#[command(name = "locsync", version, about)]
struct Args {
    /// Extract routing and rendering attributes instead of running the
    /// full reconciliation pass
    #[arg(long)]
    routing: bool,

    /// Layout configuration file (JSON); defaults to the two-repository
    /// checkout convention
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a JSON summary of the run to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => SyncConfig::from_json_file(path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SyncConfig::default(),
    };

    let report = if args.routing {
        routing::run_routing(&config)
    } else {
        sync::run_sync(&config)
    };

    if let Some(path) = &args.report {
        report
            .export_json(path)
            .with_context(|| format!("writing report to {}", path.display()))?;
    }

    Ok(())
}
