use std::sync::Arc;

use crate::app::error::Result;
use crate::client::FeedClient;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::search::{QueryOrchestrator, SearchHandle};

/// Wires configuration, transport and client together.
pub struct AppContext {
    pub config: Config,
    pub client: Arc<FeedClient>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> =
            Arc::new(HttpFetcher::with_timeout(config.http.timeout())?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Build a context around any transport, e.g. a stub in tests.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self {
            config,
            client: Arc::new(FeedClient::new(fetcher)),
        }
    }

    /// Start a search orchestrator on the current runtime.
    pub fn start_search(&self) -> SearchHandle {
        QueryOrchestrator::spawn(
            self.client.clone(),
            self.config.feed.endpoint(),
            self.config.search.debounce(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::{StubFetcher, StubResponse};
    use crate::search::SearchEvent;

    #[tokio::test(start_paused = true)]
    async fn test_start_search_uses_configured_endpoint() {
        let mut config = Config::default();
        config.feed.base_url = "https://feeds.example.com/photos?tags=".into();
        config.feed.default_query = "owls".into();

        let stub = Arc::new(StubFetcher::new(StubResponse::ok(r#"{"items": []}"#)));
        let ctx = AppContext::with_fetcher(config, stub.clone());
        let handle = ctx.start_search();
        let mut events = handle.events();

        handle.on_query_changed("");
        let event = events.recv().await.unwrap();

        assert_eq!(
            event,
            SearchEvent::Loaded {
                query: String::new(),
                count: 0
            }
        );
        assert_eq!(
            stub.requests(),
            vec!["https://feeds.example.com/photos?tags=owls"]
        );
    }
}
