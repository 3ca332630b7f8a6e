use std::path::{Path, PathBuf};

use async_trait::async_trait;
use lexis_core::level::level_dir;
use lexis_core::{CheckReport, Dataset, ViolationKind};

use super::ImageTree;
use crate::Check;

/// Rescan the image tree, or record why it could not be read
fn scan_or_report(root: &Path, report: &mut CheckReport) -> Option<ImageTree> {
    match ImageTree::scan(root) {
        Ok(tree) => Some(tree),
        Err(e) => {
            report.push(
                ViolationKind::MissingAsset,
                format!("Cannot read image directory '{}': {e}", root.display()),
            );
            None
        }
    }
}

/// Every entry has `<word>.png` under `<LEVEL>/<category>/`
pub struct FilenamesCheck {
    root: PathBuf,
}

impl FilenamesCheck {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl Check for FilenamesCheck {
    fn name(&self) -> &'static str {
        "images.filenames"
    }

    fn description(&self) -> &'static str {
        "every word has a matching local png image"
    }

    async fn run(&self, dataset: &Dataset) -> CheckReport {
        let mut report = CheckReport::new(self.name());
        let Some(tree) = scan_or_report(&self.root, &mut report) else {
            return report;
        };

        for entry in dataset.entries() {
            let Some(word) = entry.word() else {
                continue;
            };

            let word = word.to_lowercase();
            if !tree.contains(&level_dir(entry.level), entry.category, &format!("{word}.png")) {
                report.push(
                    ViolationKind::MissingAsset,
                    format!("Missing image for word '{word}' {}", entry.location()),
                );
            }
        }

        report
    }
}

/// Word and image counts agree for every level/category pair
pub struct CategoryCountsCheck {
    root: PathBuf,
}

impl CategoryCountsCheck {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl Check for CategoryCountsCheck {
    fn name(&self) -> &'static str {
        "images.category_counts"
    }

    fn description(&self) -> &'static str {
        "each category has as many images as words"
    }

    async fn run(&self, dataset: &Dataset) -> CheckReport {
        let mut report =
            CheckReport::new(self.name()).with_header("Mismatched word and image counts:");
        let Some(tree) = scan_or_report(&self.root, &mut report) else {
            return report;
        };

        for cat in dataset.categories() {
            let num_words = cat.entries.len();
            let num_images = tree.images(&level_dir(cat.level), cat.category).len();

            if num_words != num_images {
                report.push(
                    ViolationKind::CountMismatch,
                    format!(
                        "Level '{}', category '{}': {num_words} words, {num_images} images",
                        cat.level, cat.category
                    ),
                );
            }
        }

        report
    }
}

/// Dataset-wide word total equals image total.
///
/// Weaker than [`CategoryCountsCheck`]: surpluses and deficits in different
/// categories cancel out.
pub struct TotalCountCheck {
    root: PathBuf,
}

impl TotalCountCheck {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl Check for TotalCountCheck {
    fn name(&self) -> &'static str {
        "images.total_count"
    }

    fn description(&self) -> &'static str {
        "total image count equals total word count"
    }

    async fn run(&self, dataset: &Dataset) -> CheckReport {
        let mut report = CheckReport::new(self.name());
        let Some(tree) = scan_or_report(&self.root, &mut report) else {
            return report;
        };

        let mut total_words = 0;
        let mut total_images = 0;
        for cat in dataset.categories() {
            total_words += cat.entries.len();
            total_images += tree.images(&level_dir(cat.level), cat.category).len();
        }

        if total_words != total_images {
            report.push(
                ViolationKind::CountMismatch,
                format!("Total words: {total_words}, Total images: {total_images}"),
            );
        }

        report
    }
}
