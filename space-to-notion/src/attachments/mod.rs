//! Maps source attachment descriptors to destination-addressable references.

mod error;

pub use error::AttachmentError;

use crate::domain::MigrationAttachment;

/// A destination-addressable reference to a source attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttachment {
    /// Absolute locator on the source host (e.g. `https://host/d/{id}`).
    pub locator: String,

    /// Display name, empty when the source carried none. Images have no
    /// display name; description markers reference them by id instead.
    pub display_name: String,
}

/// Resolves an attachment against the source base URL.
///
/// Image attachments resolve to `{base_url}/d/{id}`; file and video
/// attachments resolve from their own url field. A kind outside the closed
/// set is a hard [`AttachmentError::UnknownKind`] failure, never a skip.
///
/// # Errors
///
/// Returns [`AttachmentError::UnknownKind`] for the
/// [`Unknown`][`MigrationAttachment::Unknown`] variant.
pub fn resolve(
    attachment: &MigrationAttachment,
    base_url: &str,
) -> Result<ResolvedAttachment, AttachmentError> {
    match attachment {
        MigrationAttachment::Image { id, .. } => Ok(ResolvedAttachment {
            locator: format!("{}/d/{}", base_url.trim_end_matches('/'), id),
            display_name: String::new(),
        }),
        MigrationAttachment::File { url, name } => Ok(ResolvedAttachment {
            locator: join_locator(base_url, url),
            display_name: name.clone(),
        }),
        MigrationAttachment::Video { url, name } => Ok(ResolvedAttachment {
            locator: join_locator(base_url, url),
            display_name: name.clone(),
        }),
        MigrationAttachment::Unknown { kind } => {
            Err(AttachmentError::UnknownKind { kind: kind.clone() })
        }
    }
}

/// Joins a source-relative attachment path onto the base URL. Already
/// absolute urls pass through untouched.
fn join_locator(base_url: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        url.trim_start_matches('/')
    )
}
