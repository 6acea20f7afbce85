//! # photofeed
//!
//! Search and browse a public photo feed.
//!
//! ## Architecture
//!
//! ```text
//! keystrokes → search (debounce) → client (fetch + status) → decoder (JSON) → published state
//! ```
//!
//! Display fields such as author name, caption and dimensions are pulled out
//! of each item's raw text on demand by [`extract`].
//!
//! ## Quick Start
//!
//! ```bash
//! # One-shot search
//! photofeed search owls
//!
//! # Detail view of every result
//! photofeed search owls --details
//!
//! # Interactive, debounced search over stdin
//! photofeed browse
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires configuration, transport and client.
/// [`FeedError`](app::FeedError) is the error type for the fetch path.
pub mod app;

/// Command-line interface using clap.
///
/// - `search [QUERY]` - Fetch and print one result set
/// - `browse` - Interactive search fed from stdin
/// - `config` - Show config location and settings
pub mod cli;

/// Retrieval client and URL building.
///
/// - [`FeedClient`](client::FeedClient): validates the URL, fetches, checks status, decodes
/// - [`FeedEndpoint`](client::FeedEndpoint): base URL plus search text
pub mod client;

/// Configuration loaded from `~/.config/photofeed/config.toml`.
pub mod config;

/// JSON feed decoding into [`FeedResponse`](domain::FeedResponse).
pub mod decoder;

/// Core domain models.
///
/// - [`FeedResponse`](domain::FeedResponse): one query's items
/// - [`FeedItem`](domain::FeedItem): a photo entry with derived display fields
pub mod domain;

/// Sentinel-returning extractors for author, caption, date and dimensions.
pub mod extract;

/// Transport abstraction.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for a single GET
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
/// - [`StubFetcher`](fetcher::StubFetcher): canned responses for tests
pub mod fetcher;

/// Debounced, cancellable search orchestration.
pub mod search;
