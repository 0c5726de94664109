//! The destination write surface the engine depends on.

use async_trait::async_trait;

use super::error::NotionError;
use super::types::{Block, DatabaseSchema, PageProperties};

/// Write operations the migration engine performs against the destination.
///
/// None of these are safe to call twice for the same logical entity; the
/// engine, not the implementation, is responsible for not doing so (the
/// created-page index is the sole idempotency mechanism). The production
/// implementation is [`NotionApi`][`super::NotionApi`]; tests drive the
/// engine against an in-memory recording fake.
#[async_trait]
pub trait NotionWriter: Send + Sync {
    /// Creates a database under a page, returning the new database id.
    async fn create_database(
        &self,
        parent_page_id: &str,
        title: &str,
        schema: DatabaseSchema,
    ) -> Result<String, NotionError>;

    /// Patches an existing database's schema.
    async fn update_database_schema(
        &self,
        database_id: &str,
        patch: DatabaseSchema,
    ) -> Result<(), NotionError>;

    /// Creates a page in a database, optionally with body content blocks,
    /// returning the new page id.
    async fn create_page(
        &self,
        parent_database_id: &str,
        properties: PageProperties,
        children: Option<Vec<Block>>,
    ) -> Result<String, NotionError>;

    /// Patches an existing page's property values.
    async fn update_page_properties(
        &self,
        page_id: &str,
        patch: PageProperties,
    ) -> Result<(), NotionError>;

    /// Creates a plain-text comment on a page, returning the comment id.
    async fn create_comment(&self, parent_page_id: &str, text: &str)
        -> Result<String, NotionError>;
}
