use std::sync::Arc;

use url::Url;

use crate::app::{FeedError, Result};
use crate::decoder::FeedDecoder;
use crate::domain::FeedResponse;
use crate::fetcher::Fetcher;

pub const DEFAULT_BASE_URL: &str =
    "https://api.flickr.com/services/feeds/photos_public.gne?format=json&nojsoncallback=1&tags=";
pub const DEFAULT_QUERY: &str = "porcupine";

/// Builds feed URLs from search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEndpoint {
    pub base_url: String,
    pub default_query: String,
    /// Percent-encode search text. When off, text is appended verbatim,
    /// so `&` or `#` typed by the user leak into the query string.
    pub escape_query: bool,
}

impl Default for FeedEndpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_query: DEFAULT_QUERY.to_string(),
            escape_query: false,
        }
    }
}

impl FeedEndpoint {
    /// Empty text selects the default query.
    pub fn url_for(&self, text: &str) -> String {
        let query = if text.is_empty() {
            self.default_query.as_str()
        } else {
            text
        };

        if self.escape_query {
            let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
            format!("{}{}", self.base_url, encoded)
        } else {
            format!("{}{}", self.base_url, query)
        }
    }
}

/// Fetches a feed URL and decodes the body into a [`FeedResponse`].
pub struct FeedClient {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    decoder: FeedDecoder,
}

impl FeedClient {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self {
            fetcher,
            decoder: FeedDecoder::new(),
        }
    }

    /// Single attempt, no retries.
    pub async fn fetch(&self, url_text: &str) -> Result<FeedResponse> {
        let url = Url::parse(url_text).map_err(|source| FeedError::InvalidUrl {
            url: url_text.to_string(),
            source,
        })?;

        let result = self.fetcher.fetch(&url).await?;

        if !result.is_success() {
            return Err(FeedError::BadStatus(result.status));
        }

        self.decoder.decode(&result.body)
    }
}
