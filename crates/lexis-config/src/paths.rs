use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dataset() -> PathBuf {
    PathBuf::from("Data/english_words.json")
}

fn default_audio_root() -> PathBuf {
    PathBuf::from("phonetics")
}

fn default_image_root() -> PathBuf {
    PathBuf::from("Pics/image(with difinition)")
}

/// Locations of the dataset and the asset trees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    #[serde(default = "default_dataset")]
    pub dataset: PathBuf,
    /// Root of `<LEVEL>/<category>/<word>.mp3`
    #[serde(default = "default_audio_root")]
    pub audio_root: PathBuf,
    /// Root of `<LEVEL>/<category>/<word>.png`
    #[serde(default = "default_image_root")]
    pub image_root: PathBuf,
}

impl PathsConfig {
    pub fn new() -> Self {
        let dataset = env::var_os("LEXIS_DATASET")
            .map(PathBuf::from)
            .unwrap_or_else(default_dataset);
        let audio_root = env::var_os("LEXIS_AUDIO_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(default_audio_root);
        let image_root = env::var_os("LEXIS_IMAGE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(default_image_root);

        Self {
            dataset,
            audio_root,
            image_root,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            audio_root: default_audio_root(),
            image_root: default_image_root(),
        }
    }
}
