pub mod http_fetcher;
pub mod stub;

use async_trait::async_trait;
use url::Url;

use crate::app::Result;

pub use http_fetcher::HttpFetcher;
pub use stub::{StubFetcher, StubResponse};

/// What the transport saw: a status code and the raw body.
///
/// A non-2xx status is still a successful fetch at this level.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single GET and reports the outcome.
///
/// Implementations return [`FeedError::RequestFailed`](crate::app::FeedError::RequestFailed)
/// only for transport level failures.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResult>;
}
