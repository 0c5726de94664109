//! Success report of a completed run.

/// Counters reported after a migration run completes.
///
/// Produced only on full success; a failed run terminates with the fatal
/// error and no partial summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationSummary {
    /// Issues that received a destination page.
    pub issues_migrated: usize,

    /// Scratch pages created in the attachment repository.
    pub attachment_pages_created: usize,

    /// Destination comments written, counting attachment comments.
    pub comments_created: usize,
}
