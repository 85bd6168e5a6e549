// Analytics fetcher
// Blocking HTTP wrapper around the analytics endpoints, with a small retry
// policy. Errors bubble to the caller, which renders an empty state.

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::thread;
use std::time::Duration;

use super::config::AnalyticsConfig;
use super::{AnalyticsOverview, MetricsRange, PostPerformance};
use crate::models::post::Platform;

/// Transport seam so tests can substitute the HTTP layer.
#[cfg_attr(test, mockall::automock)]
pub trait Transport {
    fn get_json(&self, url: &str) -> Result<String>;
}

/// Real transport backed by a blocking reqwest client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build analytics HTTP client")?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .context("Network error during analytics fetch")?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!("analytics fetch failed with HTTP status {}", status));
        }

        response
            .text()
            .context("Failed to read analytics response body")
    }
}

/// Typed client for the analytics endpoints.
pub struct AnalyticsService<T: Transport> {
    transport: T,
    base_url: String,
    max_retries: usize,
    retry_delay_ms: u64,
}

impl AnalyticsService<HttpTransport> {
    pub fn new(config: &AnalyticsConfig) -> Result<Self> {
        Ok(Self::with_transport(
            HttpTransport::new(config.timeout_secs)?,
            config,
        ))
    }
}

impl<T: Transport> AnalyticsService<T> {
    pub fn with_transport(transport: T, config: &AnalyticsConfig) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.retries,
            retry_delay_ms: config.retry_delay_ms,
        }
    }

    /// Daily metrics for a platform over the reporting window.
    pub fn fetch_overview(
        &self,
        platform: Platform,
        range: MetricsRange,
    ) -> Result<AnalyticsOverview> {
        let url = format!(
            "{}/analytics/{}/overview?days={}",
            self.base_url,
            platform.as_str(),
            range.days()
        );
        let body = self.get_with_retry(&url)?;
        serde_json::from_str(&body).context("Failed to parse analytics overview response")
    }

    /// Best performing posts for a platform over the reporting window.
    pub fn fetch_top_posts(
        &self,
        platform: Platform,
        range: MetricsRange,
    ) -> Result<Vec<PostPerformance>> {
        let url = format!(
            "{}/analytics/{}/top-posts?days={}",
            self.base_url,
            platform.as_str(),
            range.days()
        );
        let body = self.get_with_retry(&url)?;
        serde_json::from_str(&body).context("Failed to parse top posts response")
    }

    fn get_with_retry(&self, url: &str) -> Result<String> {
        let mut last_error: Option<anyhow::Error> = None;

        for attempt in 0..=self.max_retries {
            match self.transport.get_json(url) {
                Ok(body) => return Ok(body),
                Err(err) => {
                    let is_last_attempt = attempt == self.max_retries;
                    if is_last_attempt {
                        last_error = Some(err.context(format!(
                            "Failed to fetch {} after {} attempts",
                            url,
                            attempt + 1
                        )));
                    } else {
                        log::warn!("analytics fetch attempt {} failed for {}: {}", attempt + 1, url, err);
                        if self.retry_delay_ms > 0 {
                            thread::sleep(Duration::from_millis(self.retry_delay_ms));
                        }
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("Unknown analytics fetch error")))
    }
}
