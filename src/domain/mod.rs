pub mod feed;
pub mod item;

pub use feed::FeedResponse;
pub use item::{FeedItem, ItemDetails, Media};
