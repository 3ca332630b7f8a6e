use serde_json::{Map, Value};

use crate::text::is_truthy;

/// Placeholder used in messages when an entry has no usable `word`
pub const UNKNOWN_WORD: &str = "<unknown>";

/// A word entry together with where it lives in the dataset
#[derive(Debug, Clone, Copy)]
pub struct EntryRef<'a> {
    pub level: &'a str,
    pub category: &'a str,
    /// Position inside the category list
    pub index: usize,
    pub value: &'a Value,
}

impl<'a> EntryRef<'a> {
    pub fn as_object(&self) -> Option<&'a Map<String, Value>> {
        self.value.as_object()
    }

    pub fn field(&self, key: &str) -> Option<&'a Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// The `word` field, if it is text
    pub fn word(&self) -> Option<&'a str> {
        self.field("word").and_then(Value::as_str)
    }

    /// Word for use in messages
    pub fn word_label(&self) -> &'a str {
        self.word().unwrap_or(UNKNOWN_WORD)
    }

    /// Whether the entry declares phonetic data worth an audio file
    pub fn has_phonetics(&self) -> bool {
        self.field("phonetics").is_some_and(is_truthy)
    }

    /// Remote image locator, when the entry declares a non-empty one
    pub fn image_url(&self) -> Option<&'a str> {
        self.field("image")
            .filter(|v| is_truthy(v))
            .and_then(Value::as_str)
    }

    /// Location prefix shared by most messages
    pub fn location(&self) -> String {
        format!("in level '{}', category '{}'", self.level, self.category)
    }
}
