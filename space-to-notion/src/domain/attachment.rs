//! Attachment kinds understood by the migration.

/// The closed set of attachment kinds the source system can report.
///
/// Only the image variant is separately addressable from within description
/// text: descriptions embed `![caption](/d/{id}?f=0)` markers referencing an
/// image attachment by its id.
///
/// [`Unknown`][`MigrationAttachment::Unknown`] is produced by the fetch side
/// when the source reports a kind outside this set. Resolving it is a hard
/// error, not a skip: an unrecognized attachment means the domain model is
/// out of sync with the source system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationAttachment {
    /// An embedded image. `url` is the source-side download path.
    Image { id: String, url: String },

    /// A plain file.
    File { url: String, name: String },

    /// A video.
    Video { url: String, name: String },

    /// An attachment kind the domain does not model, with the kind string
    /// the source reported.
    Unknown { kind: String },
}
