//! Error types for seism-feed.

use thiserror::Error;

/// Transport-level fetch failure. No partial body ever accompanies one of
/// these; the caller treats it as "no data this round".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("response body is not valid UTF-8: {0}")]
    Body(#[source] std::str::Utf8Error),
}

impl FetchError {
    pub(crate) fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FetchError::Transport(Box::new(err))
    }
}

/// The payload as a whole could not be decoded.
///
/// Per-feature problems never produce this; they degrade to skip diagnostics
/// on the report instead.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("feed payload is not a GeoJSON feature collection: {0}")]
    Payload(#[source] serde_json::Error),
}

/// Failure of the whole query pipeline, one variant per stage.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid query URL: {0:?}")]
    InvalidUrl(String),

    #[error("feed fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("feed decode failed: {0}")]
    Decode(#[from] DecodeError),
}
