use async_trait::async_trait;
use lexis_core::text::is_lowercase;
use lexis_core::{CheckReport, Dataset, EntryRef, ViolationKind};
use serde_json::Value;

use crate::Check;

/// Every string in a word entry, up to one level of nesting, is lowercase
pub struct LowercaseCheck;

impl LowercaseCheck {
    fn check_entry(entry: &EntryRef<'_>, report: &mut CheckReport) {
        // Shape problems belong to schema.fields
        let Some(fields) = entry.as_object() else {
            return;
        };

        let tail = format!("{}. Word - '{}'", entry.location(), entry.word_label());
        let mut flag = |field: String| {
            report.push(
                ViolationKind::Casing,
                format!("Invalid case for {field} {tail}"),
            );
        };

        for (key, value) in fields {
            match value {
                Value::String(s) if !is_lowercase(s) => flag(format!("'{key}'")),
                Value::Array(items) => {
                    for item in items {
                        if item.as_str().is_some_and(|s| !is_lowercase(s)) {
                            flag(format!("'{key}'"));
                        }
                    }
                }
                Value::Object(nested) => {
                    for (sub_key, sub_value) in nested {
                        if sub_value.as_str().is_some_and(|s| !is_lowercase(s)) {
                            flag(format!("'{sub_key}' in '{key}'"));
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

#[async_trait]
impl Check for LowercaseCheck {
    fn name(&self) -> &'static str {
        "schema.lowercase"
    }

    fn description(&self) -> &'static str {
        "text values, list items and nested text values are lowercase"
    }

    async fn run(&self, dataset: &Dataset) -> CheckReport {
        let mut report = CheckReport::new(self.name());

        for entry in dataset.entries() {
            Self::check_entry(&entry, &mut report);
        }

        report
    }
}
