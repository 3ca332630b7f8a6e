use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use lexis_checks::Battery;
use lexis_core::Dataset;
use lexis_probe::{HttpProbe, ImageProbe};
use tracing_subscriber::EnvFilter;

mod cli;
mod output;
mod profile;

use self::cli::{Cli, LogFormat, OutputFormat};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match cli.log_format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Load once, run the battery, print the report. `Ok(false)` means some check failed.
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = profile::resolve_config(&cli)?;
    tracing::debug!(
        "Dataset {}, audio {}, images {}, schema {}",
        config.paths.dataset.display(),
        config.paths.audio_root.display(),
        config.paths.image_root.display(),
        config.schema.variant
    );

    let probe: Option<Arc<dyn ImageProbe>> = if config.remote.enabled {
        let probe = HttpProbe::new(&config.remote).context("Failed to build HTTP client")?;
        let meta = probe.metadata();
        tracing::debug!("Image probe {} (network: {})", meta.name, meta.uses_network);
        Some(Arc::new(probe))
    } else {
        None
    };

    let mut battery = Battery::from_config(&config, probe);
    profile::select_checks(&mut battery, &cli.only, &cli.skip)?;

    if cli.list {
        for (name, description) in battery.describe() {
            println!("{name:<24} {description}");
        }
        return Ok(true);
    }

    let dataset = Dataset::load_from_file(&config.paths.dataset)
        .with_context(|| format!("Failed to load dataset {}", config.paths.dataset.display()))?;

    let report = battery.run(&dataset).await;

    match cli.format {
        OutputFormat::Text => println!("{}", output::render_text(&report)),
        OutputFormat::Json => println!("{}", output::render_json(&report)?),
    }

    if report.passed() {
        tracing::info!("All {} checks passed", report.checks.len());
    }
    Ok(report.passed())
}
