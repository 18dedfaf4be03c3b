//! HTTP client for city wait-time pages.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::{CityFetchError, ScraperError};
use crate::extract::parse_city_page;
use crate::rate_limit::retry_with_backoff;
use crate::types::CityWaitRecord;

/// Fallback when a 429 response carries no usable `Retry-After` header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Fetches city pages with typed errors and retry on transient failures.
///
/// 429, network failures and 5xx responses are retried with exponential
/// backoff up to `max_retries` additional attempts. 404 and other 4xx
/// responses fail immediately.
pub struct WaitTimeClient {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl WaitTimeClient {
    /// Creates a client with the given request timeout, `User-Agent`, and
    /// retry policy. Set `max_retries` to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches the HTML body of a city page.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`]: `url` does not parse (not retried).
    /// - [`ScraperError::RateLimited`]: HTTP 429 after all retries.
    /// - [`ScraperError::NotFound`]: HTTP 404 (not retried).
    /// - [`ScraperError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`ScraperError::Http`]: network or TLS failure after all retries.
    pub async fn fetch_city_page(&self, url: &str) -> Result<String, ScraperError> {
        let parsed = Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;
        let domain = parsed.host_str().unwrap_or(url).to_owned();

        let body = retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.to_owned();
            let domain = domain.clone();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(
                        reqwest::header::ACCEPT,
                        "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
                    )
                    .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.trim().parse::<u64>().ok())
                        .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
                    return Err(ScraperError::RateLimited {
                        domain,
                        retry_after_secs,
                    });
                }

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(ScraperError::NotFound { url });
                }

                if !status.is_success() {
                    return Err(ScraperError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                Ok(response.text().await?)
            }
        })
        .await?;

        tracing::info!(url, bytes = body.len(), "fetched city page");
        Ok(body)
    }

    /// Fetches a city page and extracts its wait-time record.
    ///
    /// # Errors
    ///
    /// Returns [`CityFetchError::Fetch`] when the page cannot be retrieved
    /// and [`CityFetchError::Extract`] when it does not have the expected
    /// layout.
    pub async fn fetch_city_waits(&self, url: &str) -> Result<CityWaitRecord, CityFetchError> {
        let body = self.fetch_city_page(url).await?;
        Ok(parse_city_page(&body)?)
    }
}
