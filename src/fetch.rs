use crate::{config::Config, Error, Result};
use std::time::Duration;

/// Retrieves the markup behind a canonical problem URL.
///
/// This is the only place the pipeline waits on the outside world. Failures are
/// returned as [`Error::Fetch`] and never retried.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, url: &str) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let wrap = |e: reqwest::Error| Error::Fetch {
            url: url.to_string(),
            source: Box::new(e),
        };

        let html = self
            .client
            .get(url)
            .send()
            .await
            .map_err(wrap)?
            .error_for_status()
            .map_err(wrap)?
            .text()
            .await
            .map_err(wrap)?;
        Ok(html)
    }
}
