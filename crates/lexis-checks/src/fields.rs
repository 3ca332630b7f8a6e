use async_trait::async_trait;
use lexis_config::SchemaVariant;
use lexis_core::{CheckReport, Dataset, EntryRef, ViolationKind};
use serde_json::{Map, Value};

use crate::Check;

/// Per-entry field presence, typing and key count
pub struct FieldsCheck {
    variant: SchemaVariant,
}

impl FieldsCheck {
    pub fn new(variant: SchemaVariant) -> Self {
        Self { variant }
    }

    fn check_entry(&self, entry: &EntryRef<'_>, report: &mut CheckReport) {
        let whereabouts = describe(entry);

        let Some(fields) = entry.as_object() else {
            report.push(
                ViolationKind::Field,
                format!("Invalid word data format {whereabouts}"),
            );
            return;
        };

        let mut invalid = |field: &str| {
            report.push(
                ViolationKind::Field,
                format!("Invalid '{field}' data type {whereabouts}"),
            );
        };

        if !non_empty_text(fields, "word") {
            invalid("word");
        }
        if !non_empty_text(fields, "part_of_speech") {
            invalid("part_of_speech");
        }

        for field in ["examples", "definition"] {
            match text_list(fields, field) {
                Some(0) if self.variant.requires_non_empty_lists() => {
                    report.push(
                        ViolationKind::Field,
                        format!("Empty '{field}' {whereabouts}"),
                    );
                }
                Some(_) => {}
                None => report.push(
                    ViolationKind::Field,
                    format!("Invalid '{field}' data type {whereabouts}"),
                ),
            }
        }

        if self.variant.requires_frequency() && !is_integer(fields.get("frequency")) {
            report.push(
                ViolationKind::Field,
                format!("Invalid 'frequency' data type {whereabouts}"),
            );
        }

        if let Some(phonetics) = fields.get("phonetics").filter(|v| !v.is_null()) {
            match phonetics.as_object() {
                Some(phonetics) => {
                    for sub in ["mp3", "transcription"] {
                        if !nullable_text(phonetics, sub) {
                            report.push(
                                ViolationKind::Field,
                                format!("Invalid '{sub}' data type {whereabouts}"),
                            );
                        }
                    }
                }
                None => report.push(
                    ViolationKind::Field,
                    format!("Invalid 'phonetics' data type {whereabouts}"),
                ),
            }
        }

        let expected = self.variant.key_count();
        if fields.len() != expected {
            report.push(
                ViolationKind::Field,
                format!(
                    "Invalid number of keys in word data {whereabouts}: expected {expected}, found {}",
                    fields.len()
                ),
            );
        }
    }
}

#[async_trait]
impl Check for FieldsCheck {
    fn name(&self) -> &'static str {
        "schema.fields"
    }

    fn description(&self) -> &'static str {
        "word entries have the required fields, types and key count"
    }

    async fn run(&self, dataset: &Dataset) -> CheckReport {
        let mut report = CheckReport::new(self.name());
        tracing::debug!("Checking fields against the {} schema", self.variant);

        for entry in dataset.entries() {
            self.check_entry(&entry, &mut report);
        }

        report
    }
}

/// Location plus the word when it is known, else the entry position
fn describe(entry: &EntryRef<'_>) -> String {
    match entry.word() {
        Some(word) => format!("{}. Word - '{word}'", entry.location()),
        None => format!("{}. Entry #{}", entry.location(), entry.index),
    }
}

fn non_empty_text(fields: &Map<String, Value>, key: &str) -> bool {
    fields
        .get(key)
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}

/// Length of a list made only of strings, `None` when absent or mistyped
fn text_list(fields: &Map<String, Value>, key: &str) -> Option<usize> {
    let items = fields.get(key)?.as_array()?;
    items.iter().all(Value::is_string).then_some(items.len())
}

fn nullable_text(fields: &Map<String, Value>, key: &str) -> bool {
    matches!(fields.get(key), Some(Value::Null | Value::String(_)))
}

fn is_integer(value: Option<&Value>) -> bool {
    value.is_some_and(|v| v.is_i64() || v.is_u64())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ranked_entry() -> Value {
        json!({
            "word": "cat",
            "part_of_speech": "noun",
            "examples": ["the cat sleeps"],
            "definition": ["a small domesticated feline"],
            "frequency": 1200,
            "phonetics": { "mp3": null, "transcription": "kæt" },
        })
    }

    async fn run(variant: SchemaVariant, entry: Value) -> CheckReport {
        let dataset = Dataset::from_value(json!({ "a1": { "Animals": [entry] } })).unwrap();
        FieldsCheck::new(variant).run(&dataset).await
    }

    fn messages(report: &CheckReport) -> Vec<&str> {
        report.violations.iter().map(|v| v.message.as_str()).collect()
    }

    #[tokio::test]
    async fn valid_ranked_entry_passes() {
        assert!(run(SchemaVariant::Ranked, ranked_entry()).await.passed());
    }

    #[tokio::test]
    async fn ranked_allows_empty_lists() {
        let mut entry = ranked_entry();
        entry["examples"] = json!([]);
        entry["definition"] = json!([]);
        assert!(run(SchemaVariant::Ranked, entry).await.passed());
    }

    #[tokio::test]
    async fn plain_rejects_empty_lists() {
        let mut entry = ranked_entry();
        entry.as_object_mut().unwrap().shift_remove("frequency");
        entry["examples"] = json!([]);

        let report = run(SchemaVariant::Plain, entry).await;
        assert_eq!(
            messages(&report),
            ["Empty 'examples' in level 'a1', category 'Animals'. Word - 'cat'"]
        );
    }

    #[tokio::test]
    async fn non_object_entry() {
        let report = run(SchemaVariant::Ranked, json!(["cat"])).await;
        assert_eq!(
            messages(&report),
            ["Invalid word data format in level 'a1', category 'Animals'. Entry #0"]
        );
    }

    #[tokio::test]
    async fn empty_part_of_speech_is_rejected() {
        let mut entry = ranked_entry();
        entry["part_of_speech"] = json!("");
        let report = run(SchemaVariant::Ranked, entry).await;
        assert_eq!(
            messages(&report),
            ["Invalid 'part_of_speech' data type in level 'a1', category 'Animals'. Word - 'cat'"]
        );
    }

    #[tokio::test]
    async fn missing_word_uses_entry_position() {
        let mut entry = ranked_entry();
        entry["word"] = json!(7);
        let report = run(SchemaVariant::Ranked, entry).await;
        assert_eq!(
            messages(&report),
            ["Invalid 'word' data type in level 'a1', category 'Animals'. Entry #0"]
        );
    }

    #[tokio::test]
    async fn non_string_list_items_are_rejected() {
        let mut entry = ranked_entry();
        entry["definition"] = json!(["a feline", 3]);
        let report = run(SchemaVariant::Ranked, entry).await;
        assert_eq!(report.violations.len(), 1);
        assert!(report.violations[0].message.starts_with("Invalid 'definition' data type"));
    }

    #[tokio::test]
    async fn frequency_must_be_an_integer() {
        let mut entry = ranked_entry();
        entry["frequency"] = json!("often");
        let report = run(SchemaVariant::Ranked, entry).await;
        assert_eq!(report.violations.len(), 1);
        assert!(report.violations[0].message.starts_with("Invalid 'frequency' data type"));
    }

    #[tokio::test]
    async fn phonetics_shape() {
        let mut entry = ranked_entry();
        entry["phonetics"] = json!({ "mp3": 3, "transcription": "kæt" });
        let report = run(SchemaVariant::Ranked, entry).await;
        assert_eq!(report.violations.len(), 1);
        assert!(report.violations[0].message.starts_with("Invalid 'mp3' data type"));

        let mut entry = ranked_entry();
        entry["phonetics"] = json!({ "mp3": null });
        let report = run(SchemaVariant::Ranked, entry).await;
        assert!(report.violations[0].message.starts_with("Invalid 'transcription' data type"));

        let mut entry = ranked_entry();
        entry["phonetics"] = json!("kæt");
        let report = run(SchemaVariant::Ranked, entry).await;
        assert!(report.violations[0].message.starts_with("Invalid 'phonetics' data type"));

        let mut entry = ranked_entry();
        entry["phonetics"] = json!(null);
        assert!(run(SchemaVariant::Ranked, entry).await.passed());
    }

    #[tokio::test]
    async fn extra_key_fails_key_count_only() {
        let report = run(SchemaVariant::Plain, ranked_entry()).await;
        assert_eq!(
            messages(&report),
            [
                "Invalid number of keys in word data in level 'a1', category 'Animals'. Word - 'cat': expected 5, found 6"
            ]
        );
    }

    #[tokio::test]
    async fn collects_every_violation_across_entries() {
        let dataset = Dataset::from_value(json!({
            "a1": { "Animals": [ { "word": "" }, 42 ] },
            "a2": { "Sport": [ ranked_entry() ] },
        }))
        .unwrap();
        let report = FieldsCheck::new(SchemaVariant::Ranked).run(&dataset).await;

        // word, part_of_speech, examples, definition, frequency, key count, then the scalar entry
        assert_eq!(report.violations.len(), 7);
        assert!(report.violations.iter().all(|v| v.kind == ViolationKind::Field));
    }
}
