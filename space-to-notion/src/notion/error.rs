//! Notion write error types.

use thiserror::Error;

/// Errors that can occur while writing to the Notion API.
///
/// Any variant is fatal to the run: the engine performs no retries and no
/// cleanup of pages already created.
#[derive(Debug, Error)]
pub enum NotionError {
    /// Transport-level failure.
    #[error("Notion API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Notion API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// A success response lacked an expected field.
    #[error("Notion API response missing field '{field}'")]
    MissingField { field: &'static str },
}
