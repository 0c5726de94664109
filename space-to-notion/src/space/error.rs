//! Space fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching issues from JetBrains Space.
#[derive(Debug, Error)]
pub enum SpaceError {
    /// Transport-level failure or non-success API status.
    #[error("Space API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL does not parse.
    #[error("invalid Space base URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}
