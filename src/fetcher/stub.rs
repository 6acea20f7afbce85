//! In-memory [`Fetcher`] that serves canned responses.
//!
//! Used by the client and search tests so that decode and error paths can be
//! exercised without a network.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::app::{FeedError, Result};
use crate::fetcher::{FetchResult, Fetcher};

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub delay: Option<Duration>,
    pub transport_error: bool,
}

impl StubResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: None,
            transport_error: false,
        }
    }

    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }

    /// Simulates a connection failure instead of a response.
    pub fn transport_error() -> Self {
        Self {
            transport_error: true,
            ..Self::new(0, Vec::new())
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Serves the first route whose key is contained in the requested URL,
/// falling back to the default response.
pub struct StubFetcher {
    default: Mutex<StubResponse>,
    routes: Mutex<Vec<(String, StubResponse)>>,
    requests: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new(default: StubResponse) -> Self {
        Self {
            default: Mutex::new(default),
            routes: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(&self, response: StubResponse) {
        *lock(&self.default) = response;
    }

    pub fn route(&self, url_contains: impl Into<String>, response: StubResponse) {
        lock(&self.routes).push((url_contains.into(), response));
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }

    fn response_for(&self, url: &str) -> StubResponse {
        lock(&self.routes)
            .iter()
            .find(|(key, _)| url.contains(key.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| lock(&self.default).clone())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResult> {
        lock(&self.requests).push(url.to_string());
        let response = self.response_for(url.as_str());

        if let Some(delay) = response.delay {
            tokio::time::sleep(delay).await;
        }

        if response.transport_error {
            return Err(FeedError::RequestFailed(format!(
                "connection refused: {}",
                url
            )));
        }

        Ok(FetchResult {
            status: response.status,
            body: response.body,
        })
    }
}
