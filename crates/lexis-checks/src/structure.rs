use async_trait::async_trait;
use lexis_core::dataset::kind_of;
use lexis_core::{CATEGORIES, CheckReport, Dataset, Level, ViolationKind};

use crate::Check;

/// Top-level keys are exactly the six levels, in order, each holding an object
pub struct LevelKeysCheck;

#[async_trait]
impl Check for LevelKeysCheck {
    fn name(&self) -> &'static str {
        "structure.levels"
    }

    fn description(&self) -> &'static str {
        "top-level keys are a1..c2 in order and every level is an object"
    }

    async fn run(&self, dataset: &Dataset) -> CheckReport {
        let mut report = CheckReport::new(self.name());

        let expected: Vec<&str> = Level::ALL.iter().map(|l| l.as_str()).collect();
        let found = dataset.level_keys();
        if found != expected {
            report.push(
                ViolationKind::Structural,
                format!(
                    "Expected levels [{}], found [{}]",
                    expected.join(", "),
                    found.join(", ")
                ),
            );
        }

        for (level, value) in dataset.levels() {
            if !value.is_object() {
                report.push(
                    ViolationKind::Structural,
                    format!("Level '{level}' must be an object, found {}", kind_of(value)),
                );
            }
        }

        report
    }
}

/// Every level carries all fifteen categories, each holding a list of entries
pub struct CategoriesCheck;

#[async_trait]
impl Check for CategoriesCheck {
    fn name(&self) -> &'static str {
        "structure.categories"
    }

    fn description(&self) -> &'static str {
        "every level contains all fifteen categories and each category is a list"
    }

    async fn run(&self, dataset: &Dataset) -> CheckReport {
        let mut report = CheckReport::new(self.name());

        for (level, value) in dataset.levels() {
            let Some(categories) = value.as_object() else {
                report.push(
                    ViolationKind::Structural,
                    format!("Level '{level}' cannot hold categories, found {}", kind_of(value)),
                );
                continue;
            };

            for category in CATEGORIES {
                if !categories.contains_key(category) {
                    report.push(
                        ViolationKind::Structural,
                        format!("Missing category '{category}' in level '{level}'"),
                    );
                }
            }

            // Extra categories are allowed but must still be lists
            for (category, entries) in categories {
                if !entries.is_array() {
                    report.push(
                        ViolationKind::Structural,
                        format!(
                            "Category '{category}' in level '{level}' must be a list, found {}",
                            kind_of(entries)
                        ),
                    );
                }
            }
        }

        report
    }
}
