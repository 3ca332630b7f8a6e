use std::path::{Path, PathBuf};

use async_trait::async_trait;
use lexis_core::level::level_dir;
use lexis_core::{CheckReport, Dataset, EntryRef, ViolationKind};

use crate::Check;

/// Entries with phonetic data have `<root>/<LEVEL>/<category>/<word>.mp3`
pub struct AudioFilesCheck {
    root: PathBuf,
}

impl AudioFilesCheck {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Expected audio path for an entry
    pub fn audio_path(root: &Path, entry: &EntryRef<'_>, word: &str) -> PathBuf {
        root.join(level_dir(entry.level))
            .join(entry.category)
            .join(format!("{word}.mp3"))
    }
}

#[async_trait]
impl Check for AudioFilesCheck {
    fn name(&self) -> &'static str {
        "audio.files"
    }

    fn description(&self) -> &'static str {
        "every entry with phonetics has an mp3 in the audio tree"
    }

    async fn run(&self, dataset: &Dataset) -> CheckReport {
        let mut report = CheckReport::new(self.name());

        for entry in dataset.entries().filter(|e| e.has_phonetics()) {
            let Some(word) = entry.word() else {
                tracing::debug!("Skipping audio lookup for entry #{} {}", entry.index, entry.location());
                continue;
            };

            let path = Self::audio_path(&self.root, &entry, word);
            if !path.exists() {
                report.push(
                    ViolationKind::MissingAsset,
                    format!("Missing audio file for word '{word}' {}", entry.location()),
                );
            }
        }

        report
    }
}
