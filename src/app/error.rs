use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Bad response status: {0}")]
    BadStatus(u16),

    #[error("Decoding failed: {0}")]
    DecodeFailed(#[from] serde_json::Error),

    #[error("Request cancelled")]
    Cancelled,
}

impl FeedError {
    /// Cancellation is a suppressed outcome rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FeedError::Cancelled)
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        FeedError::RequestFailed(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
