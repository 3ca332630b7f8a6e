use std::sync::Arc;

use lexis_config::Config;
use lexis_core::{CheckReport, Dataset, RunReport};
use lexis_probe::ImageProbe;

pub mod audio;
pub mod casing;
pub mod fields;
pub mod images;
pub mod structure;

#[cfg(test)]
mod tests;

pub use audio::AudioFilesCheck;
pub use casing::LowercaseCheck;
pub use fields::FieldsCheck;
pub use images::{CategoryCountsCheck, FilenamesCheck, ImageTree, RemoteImagesCheck, TotalCountCheck};
pub use structure::{CategoriesCheck, LevelKeysCheck};

/// Name of every check the standard battery can contain, in run order
pub const CHECK_NAMES: [&str; 9] = [
    "structure.levels",
    "structure.categories",
    "schema.fields",
    "schema.lowercase",
    "audio.files",
    "images.remote",
    "images.filenames",
    "images.category_counts",
    "images.total_count",
];

/// One independent pass/fail verification over a loaded dataset
#[async_trait::async_trait]
pub trait Check: Send + Sync {
    /// Stable dotted name used for selection and reporting
    fn name(&self) -> &'static str;

    /// One-line summary for `--list`
    fn description(&self) -> &'static str;

    /// Run the check, collecting every violation it finds
    async fn run(&self, dataset: &Dataset) -> CheckReport;
}

/// Ordered set of checks run against the same dataset
pub struct Battery {
    checks: Vec<Box<dyn Check>>,
}

impl Battery {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Standard battery for a configuration.
    ///
    /// `images.remote` is only included when remote checks are enabled and a probe is given.
    pub fn from_config(config: &Config, probe: Option<Arc<dyn ImageProbe>>) -> Self {
        let paths = &config.paths;
        let mut battery = Self::new();

        battery.push(LevelKeysCheck);
        battery.push(CategoriesCheck);
        battery.push(FieldsCheck::new(config.schema.variant));
        battery.push(LowercaseCheck);
        battery.push(AudioFilesCheck::new(paths.audio_root.clone()));

        match probe {
            Some(probe) if config.remote.enabled => battery.push(RemoteImagesCheck::new(probe)),
            _ => tracing::debug!("Remote image checks disabled"),
        }

        battery.push(FilenamesCheck::new(paths.image_root.clone()));
        battery.push(CategoryCountsCheck::new(paths.image_root.clone()));
        if config.checks.total_count {
            battery.push(TotalCountCheck::new(paths.image_root.clone()));
        }

        battery
    }

    pub fn push(&mut self, check: impl Check + 'static) {
        self.checks.push(Box::new(check));
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// (name, description) of every check, in run order
    pub fn describe(&self) -> Vec<(&'static str, &'static str)> {
        self.checks.iter().map(|c| (c.name(), c.description())).collect()
    }

    /// Keep only the checks whose name satisfies `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.checks.retain(|c| keep(c.name()));
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check serially; a failing check never stops the others
    pub async fn run(&self, dataset: &Dataset) -> RunReport {
        let mut run = RunReport::default();

        tracing::info!("Running {} checks", self.checks.len());
        for check in &self.checks {
            tracing::debug!("Running check {}", check.name());
            let report = check.run(dataset).await;

            if report.passed() {
                tracing::debug!("{} passed", check.name());
            } else {
                tracing::error!(
                    "{} failed with {} violation(s)",
                    check.name(),
                    report.violations.len()
                );
            }

            run.push(report);
        }

        run
    }
}

impl Default for Battery {
    fn default() -> Self {
        Self::new()
    }
}
