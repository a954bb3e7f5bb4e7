use crate::error::Result;

/// A fetched page: final status and raw HTML body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// True for 2xx responses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Authenticated GET capability used by the scanner.
///
/// Non-success HTTP statuses are returned as pages; only transport failures
/// are errors.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a page body
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}
