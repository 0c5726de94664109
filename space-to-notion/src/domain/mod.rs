//! Core domain model for a migration run.
//!
//! Everything here is an immutable value describing one work item pulled out
//! of JetBrains Space:
//! - [`MigrationIssue`] - one issue with its hierarchy, attachments and comments
//! - [`MigrationAttachment`] - the closed set of attachment kinds
//! - [`MigrationComment`] - one chat message attached to an issue
//! - [`WorkingSet`] - the read-only, id-keyed collection for one run

mod attachment;
mod working_set;

pub use attachment::MigrationAttachment;
pub use working_set::WorkingSet;

use std::fmt;

/// Opaque identifier of an issue in the source system.
///
/// Unique within the source system and stable for the lifetime of a
/// migration run. Used both as the working-set key and as the idempotency
/// token of the created-page index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MigrationIssueId(String);

impl MigrationIssueId {
    /// Wraps a raw source-system identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MigrationIssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Weak back-reference to another issue.
///
/// Carries only the id and title, never the full issue, so that parent and
/// child values never form an ownership cycle. The full parent is resolved
/// by looking its id up in the [`WorkingSet`] at the moment it is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationParentIssue {
    /// Id of the parent issue in the source system.
    pub id: MigrationIssueId,

    /// Title of the parent issue.
    pub title: String,
}

/// One work item being moved from JetBrains Space into Notion.
///
/// Attachments and comments are owned, repeatable sequences: the fetch side
/// materializes them before the issue is handed to the engine, which revisits
/// them more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationIssue {
    /// Name of the Space project the issue belongs to.
    pub project_name: String,

    /// The issue's parent, if it has one. The source may report several
    /// parents; only the first one is kept.
    pub parent: Option<MigrationParentIssue>,

    /// Source-system identifier.
    pub id: MigrationIssueId,

    /// Issue title.
    pub title: String,

    /// Free-text description, possibly containing embedded image markers.
    pub description: Option<String>,

    /// Attachments on the issue itself.
    pub attachments: Vec<MigrationAttachment>,

    /// Chat messages on the issue, oldest first.
    pub comments: Vec<MigrationComment>,
}

/// One chat message on an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationComment {
    /// Message text.
    pub text: String,

    /// Attachments on the message. Empty when the message carried none.
    pub attachments: Vec<MigrationAttachment>,
}
