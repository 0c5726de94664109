//! Attachment resolution error types.

use thiserror::Error;

/// Errors that can occur while resolving an attachment.
#[derive(Debug, Error)]
pub enum AttachmentError {
    /// The source reported an attachment kind outside the modeled set.
    #[error("unknown attachment kind '{kind}'")]
    UnknownKind { kind: String },
}
