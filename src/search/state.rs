use std::sync::Arc;

use crate::domain::{FeedItem, FeedResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Debouncing,
    Fetching,
}

/// Snapshot published to observers after every transition.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Text of the most recent query sent to the network.
    pub query: Option<String>,
    pub response: Arc<FeedResponse>,
    pub is_loading: bool,
    pub phase: Phase,
    pub last_error: Option<String>,
}

impl SearchState {
    pub fn items(&self) -> &[FeedItem] {
        &self.response.items
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: None,
            response: Arc::new(FeedResponse::default()),
            is_loading: false,
            phase: Phase::Idle,
            last_error: None,
        }
    }
}

/// Out-of-band notifications about finished queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Loaded { query: String, count: usize },
    Failed { query: String, error: String },
}
