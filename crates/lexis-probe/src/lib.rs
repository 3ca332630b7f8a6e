mod http;

pub use http::HttpProbe;

/// Reachability check for a remote image locator
#[async_trait::async_trait]
pub trait ImageProbe: Send + Sync {
    /// Fetch the resource and return the HTTP status code
    async fn status(&self, url: &str) -> Result<u16, ProbeError>;

    /// Probe metadata
    fn metadata(&self) -> ProbeMetadata;
}

#[derive(Debug, Clone)]
pub struct ProbeMetadata {
    pub name: String,
    pub uses_network: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Probe error: {0}")]
    Other(String),
}
