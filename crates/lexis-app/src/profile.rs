use anyhow::{Context, Result, bail};
use lexis_checks::{Battery, CHECK_NAMES};
use lexis_config::Config;

use crate::cli::Cli;

/// Config file if given, else environment; CLI flags override either
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading config file {}", path.display());
            Config::load_from_file(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?
        }
        None => Config::new().context("Invalid LEXIS_* environment setting")?,
    };

    apply_overrides(&mut config, cli);
    Ok(config)
}

pub fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(dataset) = &cli.dataset {
        config.paths.dataset = dataset.clone();
    }
    if let Some(audio_root) = &cli.audio_root {
        config.paths.audio_root = audio_root.clone();
    }
    if let Some(image_root) = &cli.image_root {
        config.paths.image_root = image_root.clone();
    }
    if let Some(variant) = cli.schema {
        config.schema.variant = variant;
    }
    if cli.offline {
        config.remote.enabled = false;
    }
    if cli.no_total_count {
        config.checks.total_count = false;
    }
}

/// Apply `--only` / `--skip`, rejecting names no check carries
pub fn select_checks(battery: &mut Battery, only: &[String], skip: &[String]) -> Result<()> {
    for name in only.iter().chain(skip) {
        if !CHECK_NAMES.contains(&name.as_str()) {
            bail!(
                "Unknown check '{name}'. Known checks: {}",
                CHECK_NAMES.join(", ")
            );
        }
    }

    if !only.is_empty() {
        battery.retain(|name| only.iter().any(|o| o == name));
    }
    battery.retain(|name| !skip.iter().any(|s| s == name));

    if battery.is_empty() {
        tracing::warn!("No checks selected");
    }
    Ok(())
}
