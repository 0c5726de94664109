//! The migration engine: hierarchy-aware page creation and comment replay.
//!
//! The engine is single-threaded and fully sequential: every destination
//! write completes before the next is issued, because a child page can only
//! link to its parent once the parent's page id exists. The created-page
//! index is the sole idempotency mechanism; membership check-then-insert
//! guarantees at most one destination page per issue id per run, no matter
//! how many recursive paths reach the same ancestor.

mod error;
mod summary;

pub use error::MigratorError;
pub use summary::MigrationSummary;

use std::collections::HashMap;

use futures::future::BoxFuture;
use tracing::{info, info_span, Instrument};

use crate::attachments;
use crate::blocks;
use crate::domain::{MigrationAttachment, MigrationIssue, MigrationIssueId, WorkingSet};
use crate::notion::properties::{self, ATTACHMENT_DATABASE_TITLE};
use crate::notion::{Block, NotionWriter};

/// Destination ids created during database setup.
struct RunContext {
    database_id: String,
    attachment_database_id: String,
}

/// Drives one migration run against a destination writer.
pub struct Migrator<W> {
    writer: W,
    source_base_url: String,
    /// The created-page index: issue id to destination page id, append-only.
    pages: HashMap<MigrationIssueId, String>,
    summary: MigrationSummary,
}

impl<W: NotionWriter> Migrator<W> {
    /// Builds an engine over a destination writer. `source_base_url` is the
    /// Space host attachment locators resolve against.
    pub fn new(writer: W, source_base_url: impl Into<String>) -> Self {
        Self {
            writer,
            source_base_url: source_base_url.into(),
            pages: HashMap::new(),
            summary: MigrationSummary::default(),
        }
    }

    /// Runs the full migration: creates the destination databases, then one
    /// page per issue with parents linked, comments replayed and description
    /// attachments surfaced as link blocks.
    ///
    /// Issues are processed in input order; within one issue's ancestor
    /// chain, processing is depth-first toward the root.
    ///
    /// # Errors
    ///
    /// Any [`MigratorError`] aborts the run immediately. Pages already
    /// created are left as-is; the created-page index is not persisted, so a
    /// re-run starts clean but will duplicate them.
    pub async fn execute(
        mut self,
        root_page_id: &str,
        database_title: &str,
        issues: Vec<MigrationIssue>,
    ) -> Result<MigrationSummary, MigratorError> {
        let project_names = issues.iter().map(|issue| issue.project_name.clone());
        let schema = properties::issue_database_schema(project_names);

        let database_id = self
            .writer
            .create_database(root_page_id, database_title, schema)
            .await?;
        // The self-relation cannot be declared at creation time.
        self.writer
            .update_database_schema(&database_id, properties::parent_relation_schema(&database_id))
            .await?;

        let attachment_database_id = self
            .writer
            .create_database(
                root_page_id,
                ATTACHMENT_DATABASE_TITLE,
                properties::attachment_database_schema(),
            )
            .await?;

        info!(
            database_id = %database_id,
            attachment_database_id = %attachment_database_id,
            "Created destination databases"
        );

        let context = RunContext {
            database_id,
            attachment_database_id,
        };
        let working_set = WorkingSet::from_issues(issues);

        for id in working_set.ids() {
            if let Some(issue) = working_set.get(id) {
                self.ensure_page(issue, &working_set, &context).await?;
            }
        }

        info!(
            issues = self.summary.issues_migrated,
            comments = self.summary.comments_created,
            "Migration complete"
        );
        Ok(self.summary)
    }

    /// Creates the destination page for one issue, if it does not exist yet,
    /// and returns its page id.
    ///
    /// The issue id is recorded in the created-page index before the
    /// recursion toward the parent, so a malformed input cycle cannot recurse
    /// forever. The parent relation is only written after the recursive call
    /// returns, which guarantees the ancestor's page exists.
    fn ensure_page<'a>(
        &'a mut self,
        issue: &'a MigrationIssue,
        working_set: &'a WorkingSet,
        context: &'a RunContext,
    ) -> BoxFuture<'a, Result<String, MigratorError>> {
        let span = info_span!("ensure_page", issue_id = %issue.id);

        Box::pin(
            async move {
                if let Some(page_id) = self.pages.get(&issue.id) {
                    return Ok(page_id.clone());
                }

                let children = match issue.description.as_deref() {
                    Some(description) if !description.is_empty() => {
                        Some(self.assemble_blocks(issue, description, context).await?)
                    }
                    _ => None,
                };

                let page_id = self
                    .writer
                    .create_page(
                        &context.database_id,
                        properties::issue_properties(issue),
                        children,
                    )
                    .await?;
                self.pages.insert(issue.id.clone(), page_id.clone());
                self.summary.issues_migrated += 1;
                info!(page_id = %page_id, "Created issue page");

                self.replicate_comments(&page_id, issue).await?;

                let Some(parent) = &issue.parent else {
                    return Ok(page_id);
                };

                let parent_issue = working_set.get(&parent.id).ok_or_else(|| {
                    MigratorError::DanglingParentReference {
                        id: parent.id.clone(),
                    }
                })?;
                let parent_page_id = self.ensure_page(parent_issue, working_set, context).await?;

                self.writer
                    .update_page_properties(
                        &page_id,
                        properties::parent_relation_value(&parent_page_id),
                    )
                    .await?;

                Ok(page_id)
            }
            .instrument(span),
        )
    }

    /// Assembles an issue's description into content blocks: prose
    /// paragraphs interleaved with links to one scratch attachment page per
    /// image reference, in the order the markers appear in the text.
    async fn assemble_blocks(
        &mut self,
        issue: &MigrationIssue,
        description: &str,
        context: &RunContext,
    ) -> Result<Vec<Block>, MigratorError> {
        let parts = blocks::split_description(description);

        let mut image_links = Vec::with_capacity(parts.image_ids.len());
        for image_id in &parts.image_ids {
            let attachment = issue
                .attachments
                .iter()
                .find(|attachment| {
                    matches!(attachment, MigrationAttachment::Image { id, .. } if id == image_id)
                })
                .ok_or_else(|| MigratorError::MissingImageAttachment {
                    id: image_id.clone(),
                })?;
            let resolved = attachments::resolve(attachment, &self.source_base_url)?;

            let attachment_page_id = self
                .writer
                .create_page(
                    &context.attachment_database_id,
                    properties::title_properties(&resolved.locator),
                    None,
                )
                .await?;
            self.summary.attachment_pages_created += 1;
            image_links.push(Block::link_to_page(attachment_page_id));
        }

        let paragraphs = parts.segments.into_iter().map(Block::paragraph).collect();
        Ok(blocks::interleave(paragraphs, image_links))
    }

    /// Replays an issue's comments onto its page: one destination comment
    /// per source comment, followed by one destination comment per
    /// attachment carrying only the resolved locator.
    async fn replicate_comments(
        &mut self,
        page_id: &str,
        issue: &MigrationIssue,
    ) -> Result<(), MigratorError> {
        for comment in &issue.comments {
            self.writer.create_comment(page_id, &comment.text).await?;
            self.summary.comments_created += 1;

            for attachment in &comment.attachments {
                let resolved = attachments::resolve(attachment, &self.source_base_url)?;
                self.writer.create_comment(page_id, &resolved.locator).await?;
                self.summary.comments_created += 1;
            }
        }

        Ok(())
    }
}
