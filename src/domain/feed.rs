use serde::{Deserialize, Serialize};

use crate::domain::FeedItem;

/// One query's result set, in feed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedResponse {
    pub items: Vec<FeedItem>,
}

impl FeedResponse {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by its link, which the feed uses as a stable key.
    pub fn find(&self, link: &str) -> Option<&FeedItem> {
        self.items.iter().find(|item| item.link == link)
    }
}
