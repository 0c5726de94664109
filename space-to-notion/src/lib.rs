#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod attachments;
pub mod blocks;
pub mod domain;
pub mod migrator;
pub mod notion;
pub mod space;

pub use attachments::{resolve, AttachmentError, ResolvedAttachment};
pub use domain::{
    MigrationAttachment, MigrationComment, MigrationIssue, MigrationIssueId, MigrationParentIssue,
    WorkingSet,
};
pub use migrator::{MigrationSummary, Migrator, MigratorError};
pub use notion::{Block, DatabaseSchema, NotionApi, NotionError, NotionWriter, PageProperties};
pub use space::{fetch_issues, SpaceError};
