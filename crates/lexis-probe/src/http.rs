use async_trait::async_trait;
use lexis_config::remote::RemoteConfig;

use crate::{ImageProbe, ProbeError, ProbeMetadata};

/// Issues a GET per image locator
#[derive(Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(config: &RemoteConfig) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ImageProbe for HttpProbe {
    async fn status(&self, url: &str) -> Result<u16, ProbeError> {
        let url = reqwest::Url::parse(url).map_err(|e| ProbeError::InvalidUrl(format!("{url}: {e}")))?;

        tracing::debug!("GET {url}");
        let response = self.client.get(url).send().await?;

        Ok(response.status().as_u16())
    }

    fn metadata(&self) -> ProbeMetadata {
        ProbeMetadata {
            name: "http".to_string(),
            uses_network: true,
        }
    }
}
