//! Fetches migration issues from the JetBrains Space HTTP API.
//!
//! The fetch side fully materializes every issue before returning: the
//! engine revisits an issue's attachments and comments more than once, so
//! nothing lazy or single-pass may cross this boundary. Unknown attachment
//! kinds are not dropped here; they become
//! [`MigrationAttachment::Unknown`] and fail hard at resolution time.

mod error;

pub use error::SpaceError;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use crate::domain::{
    MigrationAttachment, MigrationComment, MigrationIssue, MigrationIssueId, MigrationParentIssue,
};

const ISSUE_BATCH_SIZE: usize = 100;
const MESSAGE_BATCH_SIZE: usize = 16;

#[derive(Debug, Deserialize)]
struct Batch<T> {
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ProjectRecord {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct IssueRecord {
    id: String,
    title: String,
    description: Option<String>,
    #[serde(default)]
    attachments: Vec<AttachmentRecord>,
    #[serde(default)]
    parents: Vec<ParentRecord>,
}

#[derive(Debug, Deserialize)]
struct ParentRecord {
    id: String,
    title: String,
}

#[derive(Debug, Deserialize)]
struct AttachmentRecord {
    details: AttachmentDetails,
}

#[derive(Debug, Deserialize)]
struct AttachmentDetails {
    #[serde(rename = "className")]
    class_name: String,
    id: Option<String>,
    filename: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MessageBatch {
    messages: Vec<MessageRecord>,
}

#[derive(Debug, Deserialize)]
struct MessageRecord {
    #[serde(default)]
    text: String,
    details: Option<MessageDetails>,
    attachments: Option<Vec<AttachmentRecord>>,
}

#[derive(Debug, Deserialize)]
struct MessageDetails {
    #[serde(rename = "className")]
    class_name: String,
}

/// Fetches every issue of every project, fully populated.
///
/// Issues arrive in creation order per project; attachments and comments are
/// collected into owned vectors before the function returns.
///
/// # Errors
///
/// Returns [`SpaceError`] if the base URL does not parse or any API call
/// fails.
pub async fn fetch_issues(base_url: &str, token: &str) -> Result<Vec<MigrationIssue>, SpaceError> {
    let base = Url::parse(base_url).map_err(|source| SpaceError::InvalidUrl {
        url: base_url.to_string(),
        source,
    })?;
    let client = Client::new();

    let projects = fetch_projects(&client, &base, token).await?;
    info!(count = projects.len(), "Fetched Space projects");

    let mut issues = Vec::new();
    for project in &projects {
        let records = fetch_project_issues(&client, &base, token, &project.id).await?;
        debug!(project = %project.name, count = records.len(), "Fetched project issues");

        for record in records {
            let comments = fetch_issue_comments(&client, &base, token, &record.id).await?;
            issues.push(to_migration_issue(record, &project.name, comments));
        }
    }

    info!(count = issues.len(), "Fetched Space issues");
    Ok(issues)
}

async fn fetch_projects(
    client: &Client,
    base: &Url,
    token: &str,
) -> Result<Vec<ProjectRecord>, SpaceError> {
    let batch: Batch<ProjectRecord> = client
        .get(endpoint(base, "/api/http/projects"))
        .bearer_auth(token)
        .query(&[("$fields", "data(id,name)")])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(batch.data)
}

async fn fetch_project_issues(
    client: &Client,
    base: &Url,
    token: &str,
    project_id: &str,
) -> Result<Vec<IssueRecord>, SpaceError> {
    let path = format!("/api/http/projects/id:{project_id}/planning/issues");
    let top = ISSUE_BATCH_SIZE.to_string();
    let mut records = Vec::new();
    let mut skip = 0usize;

    loop {
        let skip_param = skip.to_string();
        let batch: Batch<IssueRecord> = client
            .get(endpoint(base, &path))
            .bearer_auth(token)
            .query(&[
                ("sorting", "CREATED"),
                ("descending", "false"),
                ("$skip", skip_param.as_str()),
                ("$top", top.as_str()),
                (
                    "$fields",
                    "data(id,title,description,attachments(details),parents(id,title))",
                ),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if batch.data.is_empty() {
            break;
        }
        skip += batch.data.len();
        records.extend(batch.data);
    }

    Ok(records)
}

async fn fetch_issue_comments(
    client: &Client,
    base: &Url,
    token: &str,
    issue_id: &str,
) -> Result<Vec<MigrationComment>, SpaceError> {
    let channel = format!("issue:id:{issue_id}");
    let batch_size = MESSAGE_BATCH_SIZE.to_string();
    let batch: MessageBatch = client
        .get(endpoint(base, "/api/http/chats/messages"))
        .bearer_auth(token)
        .query(&[
            ("channel", channel.as_str()),
            ("sorting", "FromOldestToNewest"),
            ("batchSize", batch_size.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let comments = batch
        .messages
        .into_iter()
        .filter(is_text_message)
        .map(|message| MigrationComment {
            text: message.text,
            attachments: message
                .attachments
                .unwrap_or_default()
                .iter()
                .map(to_migration_attachment)
                .collect(),
        })
        .collect();

    Ok(comments)
}

fn endpoint(base: &Url, path: &str) -> String {
    format!("{}{}", base.as_str().trim_end_matches('/'), path)
}

fn is_text_message(message: &MessageRecord) -> bool {
    message
        .details
        .as_ref()
        .is_some_and(|details| details.class_name == "M2TextItemContent")
}

fn to_migration_issue(
    record: IssueRecord,
    project_name: &str,
    comments: Vec<MigrationComment>,
) -> MigrationIssue {
    // The source may report several parents; only the first is kept.
    let parent = record.parents.first().map(|parent| MigrationParentIssue {
        id: MigrationIssueId::new(parent.id.clone()),
        title: parent.title.clone(),
    });

    MigrationIssue {
        project_name: project_name.to_string(),
        parent,
        id: MigrationIssueId::new(record.id),
        title: record.title,
        description: record.description,
        attachments: record.attachments.iter().map(to_migration_attachment).collect(),
        comments,
    }
}

fn to_migration_attachment(record: &AttachmentRecord) -> MigrationAttachment {
    let details = &record.details;
    let id = details.id.clone().unwrap_or_default();

    match details.class_name.as_str() {
        "ImageAttachment" => MigrationAttachment::Image {
            url: format!("/d/{id}"),
            id,
        },
        "FileAttachment" => MigrationAttachment::File {
            url: format!("/d/{id}"),
            name: details.filename.clone().unwrap_or_default(),
        },
        "VideoAttachment" => MigrationAttachment::Video {
            url: format!("/d/{id}"),
            name: details.name.clone().unwrap_or_default(),
        },
        other => MigrationAttachment::Unknown {
            kind: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(class_name: &str, id: Option<&str>, filename: Option<&str>, name: Option<&str>) -> AttachmentRecord {
        AttachmentRecord {
            details: AttachmentDetails {
                class_name: class_name.to_string(),
                id: id.map(str::to_string),
                filename: filename.map(str::to_string),
                name: name.map(str::to_string),
            },
        }
    }

    #[test]
    fn image_details_map_to_image_variant() {
        let attachment = to_migration_attachment(&record("ImageAttachment", Some("img1"), None, None));

        assert_eq!(
            attachment,
            MigrationAttachment::Image {
                id: "img1".to_string(),
                url: "/d/img1".to_string(),
            }
        );
    }

    #[test]
    fn video_name_defaults_to_empty() {
        let attachment = to_migration_attachment(&record("VideoAttachment", Some("vid1"), None, None));

        assert_eq!(
            attachment,
            MigrationAttachment::Video {
                url: "/d/vid1".to_string(),
                name: String::new(),
            }
        );
    }

    #[test]
    fn unrecognized_class_becomes_unknown() {
        let attachment = to_migration_attachment(&record("AudioAttachment", Some("a1"), None, None));

        assert_eq!(
            attachment,
            MigrationAttachment::Unknown {
                kind: "AudioAttachment".to_string(),
            }
        );
    }

    #[test]
    fn first_parent_wins() {
        let record = IssueRecord {
            id: "i1".to_string(),
            title: "Issue".to_string(),
            description: None,
            attachments: Vec::new(),
            parents: vec![
                ParentRecord {
                    id: "p1".to_string(),
                    title: "First".to_string(),
                },
                ParentRecord {
                    id: "p2".to_string(),
                    title: "Second".to_string(),
                },
            ],
        };

        let issue = to_migration_issue(record, "Alpha", Vec::new());
        assert_eq!(issue.parent.unwrap().id, MigrationIssueId::new("p1"));
    }
}
