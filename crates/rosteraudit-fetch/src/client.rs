use crate::error::{FetchError, Result};
use crate::fetcher::{FetchedPage, PageFetcher};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::Client;
use rosteraudit_core::FetchConfig;
use std::time::Duration;

/// HTTP fetcher backed by a shared `reqwest` client.
///
/// The session cookie, when configured, is attached to every request so the
/// league pages render as they would for the signed-in owner.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher from fetch settings
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = &config.cookie {
            let value =
                HeaderValue::from_str(cookie).map_err(|_| FetchError::InvalidHeader("cookie"))?;
            headers.insert(COOKIE, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let parsed =
            url::Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

        let response = self.client.get(parsed).send().await?;
        let status = response.status().as_u16();
        tracing::debug!(url, status, "fetched page");

        let body = response.text().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(FetchedPage::new(url, status, body))
    }
}
