use std::sync::Arc;

use async_trait::async_trait;
use lexis_core::{CheckReport, Dataset, ViolationKind};
use lexis_probe::ImageProbe;

use crate::Check;

/// Every declared image locator answers with 200
pub struct RemoteImagesCheck {
    probe: Arc<dyn ImageProbe>,
}

impl RemoteImagesCheck {
    pub fn new(probe: Arc<dyn ImageProbe>) -> Self {
        Self { probe }
    }
}

#[async_trait]
impl Check for RemoteImagesCheck {
    fn name(&self) -> &'static str {
        "images.remote"
    }

    fn description(&self) -> &'static str {
        "every image locator is reachable"
    }

    async fn run(&self, dataset: &Dataset) -> CheckReport {
        let mut report = CheckReport::new(self.name())
            .with_header("Some image URLs returned non-200 status codes");

        let targets: Vec<(&str, &str)> = dataset
            .entries()
            .filter_map(|e| Some((e.word_label(), e.image_url()?)))
            .collect();
        tracing::info!(
            "Probing {} image URLs with {}",
            targets.len(),
            self.probe.metadata().name
        );

        // One request at a time, in traversal order
        for (word, url) in targets {
            let error = match self.probe.status(url).await {
                Ok(200) => continue,
                Ok(status) => format!("Error for word '{word}': Status {status}"),
                Err(e) => format!("Error for word '{word}': {e}"),
            };

            tracing::warn!("{error} ({url})");
            report.push(ViolationKind::Unreachable, error);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use lexis_probe::{ProbeError, ProbeMetadata};
    use serde_json::json;

    use super::*;

    /// Answers from a fixed table and records the order of requests
    struct TableProbe {
        statuses: HashMap<&'static str, u16>,
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ImageProbe for TableProbe {
        async fn status(&self, url: &str) -> Result<u16, ProbeError> {
            self.seen.lock().unwrap().push(url.to_string());
            self.statuses
                .get(url)
                .copied()
                .ok_or_else(|| ProbeError::Other("connection refused".to_string()))
        }

        fn metadata(&self) -> ProbeMetadata {
            ProbeMetadata {
                name: "table".to_string(),
                uses_network: false,
            }
        }
    }

    #[tokio::test]
    async fn collects_every_failure_in_order() {
        let probe = Arc::new(TableProbe {
            statuses: HashMap::from([
                ("https://img.example/cat.png", 200),
                ("https://img.example/dog.png", 404),
            ]),
            seen: Mutex::new(Vec::new()),
        });

        let dataset = Dataset::from_value(json!({
            "a1": { "Animals": [
                { "word": "cat", "image": "https://img.example/cat.png" },
                { "word": "dog", "image": "https://img.example/dog.png" },
                { "word": "owl", "image": "" },
                { "word": "emu" },
                { "word": "yak", "image": "https://img.example/yak.png" },
            ] }
        }))
        .unwrap();

        let report = RemoteImagesCheck::new(probe.clone()).run(&dataset).await;
        assert_eq!(
            report.failure_message().unwrap(),
            "Some image URLs returned non-200 status codes\n\
             Error for word 'dog': Status 404\n\
             Error for word 'yak': Probe error: connection refused"
        );
        assert_eq!(report.count_of(ViolationKind::Unreachable), 2);
        assert_eq!(
            *probe.seen.lock().unwrap(),
            [
                "https://img.example/cat.png",
                "https://img.example/dog.png",
                "https://img.example/yak.png",
            ]
        );
    }

    #[tokio::test]
    async fn no_images_no_requests() {
        let probe = Arc::new(TableProbe {
            statuses: HashMap::new(),
            seen: Mutex::new(Vec::new()),
        });
        let dataset = Dataset::from_value(json!({ "a1": { "Animals": [ { "word": "cat" } ] } })).unwrap();

        assert!(RemoteImagesCheck::new(probe.clone()).run(&dataset).await.passed());
        assert!(probe.seen.lock().unwrap().is_empty());
    }
}
