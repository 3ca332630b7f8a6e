use std::path::Path;

use serde_json::{Map, Value};

use crate::entry::EntryRef;
use crate::error::LoadError;

/// Vocabulary dataset: level -> category -> word entries.
///
/// The raw document is kept as-is (key order included) so that shape checks
/// can see values which would not fit a typed model.
#[derive(Debug, Clone)]
pub struct Dataset {
    root: Map<String, Value>,
}

/// One category list inside one level
#[derive(Debug, Clone, Copy)]
pub struct CategoryRef<'a> {
    pub level: &'a str,
    pub category: &'a str,
    pub entries: &'a [Value],
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub levels: usize,
    pub categories: usize,
    pub entries: usize,
}

impl Dataset {
    /// Parse a dataset from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(json_str)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(LoadError::InvalidFormat(format!(
                "expected a top-level object, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Load a dataset from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading dataset from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let dataset = Self::from_json(&json)?;

        let summary = dataset.summary();
        tracing::info!(
            "Loaded {} entries across {} levels and {} categories",
            summary.entries,
            summary.levels,
            summary.categories
        );
        Ok(dataset)
    }

    /// Level keys in document order
    pub fn level_keys(&self) -> Vec<&str> {
        self.root.keys().map(String::as_str).collect()
    }

    /// Levels in document order, with their raw values
    pub fn levels(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.root.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every category list whose level is an object and whose value is a list
    pub fn categories(&self) -> impl Iterator<Item = CategoryRef<'_>> + '_ {
        self.root.iter().flat_map(|(level, categories)| {
            categories
                .as_object()
                .into_iter()
                .flat_map(|map| map.iter())
                .filter_map(move |(category, entries)| {
                    entries.as_array().map(|entries| CategoryRef {
                        level: level.as_str(),
                        category: category.as_str(),
                        entries: entries.as_slice(),
                    })
                })
        })
    }

    /// Every word entry in traversal order (level -> category -> word)
    pub fn entries(&self) -> impl Iterator<Item = EntryRef<'_>> + '_ {
        self.categories().flat_map(|cat| {
            cat.entries
                .iter()
                .enumerate()
                .map(move |(index, value)| EntryRef {
                    level: cat.level,
                    category: cat.category,
                    index,
                    value,
                })
        })
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            levels: self.root.len(),
            categories: self.categories().count(),
            entries: self.entries().count(),
        }
    }
}

/// Short name of a JSON value's type, used in messages
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_document_key_order() {
        let dataset = Dataset::from_json(r#"{"b1": {}, "a1": {}, "c2": {}}"#).unwrap();
        assert_eq!(dataset.level_keys(), ["b1", "a1", "c2"]);
    }

    #[test]
    fn rejects_non_object_root() {
        let err = Dataset::from_value(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, LoadError::InvalidFormat(_)));
    }

    #[test]
    fn entries_skip_malformed_levels_and_categories() {
        let dataset = Dataset::from_value(json!({
            "a1": {
                "Animals": [{ "word": "cat" }, { "word": "dog" }],
                "Sport": "not a list",
            },
            "a2": [],
            "b1": { "Health": [{ "word": "cough" }] },
        }))
        .unwrap();

        let words: Vec<_> = dataset
            .entries()
            .map(|e| (e.level, e.category, e.word()))
            .collect();
        assert_eq!(
            words,
            [
                ("a1", "Animals", Some("cat")),
                ("a1", "Animals", Some("dog")),
                ("b1", "Health", Some("cough")),
            ]
        );
        assert_eq!(
            dataset.summary(),
            DatasetSummary {
                levels: 3,
                categories: 2,
                entries: 3
            }
        );
    }

    #[test]
    fn load_from_missing_file_reports_path() {
        let err = Dataset::load_from_file(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(p) if p.contains("here.json")));
    }
}
