// src/utils/http.rs

//! HTTP client utilities and the page-fetch seam.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::FetchConfig;

/// Source of rendered page markup.
///
/// The production implementation is [`HttpFetcher`]; tests substitute a
/// deterministic in-memory fetcher. The announcement source renders its
/// listings client-side, so implementations return markup only after
/// rendering has settled.
#[async_trait]
pub trait PageFetcher {
    /// Fetch the markup of one page.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP-backed page fetcher.
///
/// Holds the process-wide HTTP session for a report run; dropping the
/// fetcher releases it on every exit path.
pub struct HttpFetcher {
    client: Client,
    settle_delay: Duration,
}

impl HttpFetcher {
    /// Build a fetcher from the fetch configuration.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            settle_delay: Duration::from_millis(config.settle_delay_ms),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let text = self.client.get(url).send().await?.text().await?;
        // Give client-side rendering time to settle before the markup is used.
        if !self.settle_delay.is_zero() {
            tokio::time::sleep(self.settle_delay).await;
        }
        Ok(text)
    }
}
