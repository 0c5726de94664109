//! Migration engine error types.

use thiserror::Error;

use crate::attachments::AttachmentError;
use crate::domain::MigrationIssueId;
use crate::notion::NotionError;

/// Fatal conditions that abort a migration run.
///
/// There is no retry policy: every variant propagates immediately, and
/// pages already created stay in the destination for manual inspection.
#[derive(Debug, Error)]
pub enum MigratorError {
    /// An issue references a parent id that is not in the working set.
    #[error("parent issue '{id}' is not present in the working set")]
    DanglingParentReference { id: MigrationIssueId },

    /// A description references an image id the issue does not carry.
    #[error("description references image attachment '{id}' the issue does not carry")]
    MissingImageAttachment { id: String },

    /// An attachment kind the domain does not model.
    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    /// A destination create or update call failed.
    #[error("destination write failed: {0}")]
    Write(#[from] NotionError),
}
