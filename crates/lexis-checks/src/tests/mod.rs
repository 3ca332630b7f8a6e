//! End-to-end scenarios over a synthetic dataset and asset trees


use std::fs;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use lexis_config::{Config, SchemaVariant};
use lexis_core::{CATEGORIES, Dataset, Level};
use lexis_probe::{ImageProbe, ProbeError, ProbeMetadata};
use serde_json::{Map, Value, json};
use tempfile::TempDir;

/// Answers every request with the same status
pub struct FixedProbe(pub u16);

#[async_trait]
impl ImageProbe for FixedProbe {
    async fn status(&self, _url: &str) -> Result<u16, ProbeError> {
        Ok(self.0)
    }

    fn metadata(&self) -> ProbeMetadata {
        ProbeMetadata {
            name: "fixed".to_string(),
            uses_network: false,
        }
    }
}

pub fn fixed_probe(status: u16) -> Option<Arc<dyn ImageProbe>> {
    Some(Arc::new(FixedProbe(status)))
}

/// The `cat` entry, in the five-key layout
pub fn cat_entry() -> Value {
    json!({
        "word": "cat",
        "part_of_speech": "noun",
        "examples": ["the cat sleeps"],
        "definition": ["a small domesticated feline"],
        "phonetics": { "mp3": null, "transcription": "kæt" },
    })
}

/// All six levels with all fifteen empty categories, and `entry` under a1/Animals
pub fn dataset_with(entry: Value) -> Dataset {
    let mut root = Map::new();
    for level in Level::ALL {
        let categories: Map<String, Value> = CATEGORIES
            .iter()
            .map(|c| (c.to_string(), json!([])))
            .collect();
        root.insert(level.as_str().to_string(), Value::Object(categories));
    }
    root["a1"]["Animals"] = json!([entry]);

    Dataset::from_value(Value::Object(root)).unwrap()
}

/// Asset trees holding `A1/Animals/cat.png` and `A1/Animals/cat.mp3`
pub struct Fixture {
    _dir: TempDir,
    pub config: Config,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();

        let mut config = Config::default();
        config.paths.audio_root = dir.path().join("phonetics");
        config.paths.image_root = dir.path().join("Pics").join("image(with difinition)");
        config.paths.dataset = dir.path().join("Data").join("english_words.json");
        config.schema.variant = SchemaVariant::Plain;

        let fixture = Self { _dir: dir, config };
        touch(&fixture.image_path("cat.png"));
        touch(&fixture.config.paths.audio_root.join("A1/Animals/cat.mp3"));
        fixture
    }

    pub fn image_path(&self, name: &str) -> std::path::PathBuf {
        self.config.paths.image_root.join("A1").join("Animals").join(name)
    }
}

pub fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}
