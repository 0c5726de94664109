//! Builders for the destination database schemas and property values.
//!
//! The primary database carries three properties: the title, a single-select
//! with one option per distinct project name, and a dual self-relation
//! linking child pages to their ancestor. Notion cannot declare a
//! self-referential relation at creation time, so the relation arrives as a
//! schema patch after the database exists.

use crate::domain::MigrationIssue;

use super::types::{
    DatabaseSchema, EmptyObject, PageProperties, PageReference, PropertySchema, PropertyValue,
    RichText, SelectOption,
};

/// Name of the title property on both databases.
pub const TITLE_PROPERTY: &str = "Title";

/// Name of the project select property on the primary database.
pub const PROJECT_PROPERTY: &str = "Project";

/// Name of the self-relation property on the primary database.
pub const PARENT_PROPERTY: &str = "Parent";

/// Title of the scratch database hosting one page per embedded image.
pub const ATTACHMENT_DATABASE_TITLE: &str = "TempAttachmentRepository";

/// Creation-time schema of the primary issue database.
///
/// Project names are deduplicated preserving first-seen order; duplicates
/// across issues yield a single select option.
pub fn issue_database_schema(project_names: impl IntoIterator<Item = String>) -> DatabaseSchema {
    let mut options: Vec<SelectOption> = Vec::new();
    for name in project_names {
        if options.iter().any(|option| option.name == name) {
            continue;
        }
        options.push(SelectOption { name });
    }

    DatabaseSchema::from([
        (
            TITLE_PROPERTY.to_string(),
            PropertySchema::Title(EmptyObject::default()),
        ),
        (
            PROJECT_PROPERTY.to_string(),
            PropertySchema::Select { options },
        ),
    ])
}

/// Post-creation patch adding the dual self-relation to the database.
pub fn parent_relation_schema(database_id: &str) -> DatabaseSchema {
    DatabaseSchema::from([(
        PARENT_PROPERTY.to_string(),
        PropertySchema::Relation {
            database_id: database_id.to_string(),
            dual_property: EmptyObject::default(),
        },
    )])
}

/// Schema of the scratch attachment-repository database: a title, nothing
/// else.
pub fn attachment_database_schema() -> DatabaseSchema {
    DatabaseSchema::from([(
        TITLE_PROPERTY.to_string(),
        PropertySchema::Title(EmptyObject::default()),
    )])
}

/// Property values for an issue's page: title and project select.
pub fn issue_properties(issue: &MigrationIssue) -> PageProperties {
    PageProperties::from([
        (
            TITLE_PROPERTY.to_string(),
            PropertyValue::Title(vec![RichText::plain(issue.title.clone())]),
        ),
        (
            PROJECT_PROPERTY.to_string(),
            PropertyValue::Select(SelectOption {
                name: issue.project_name.clone(),
            }),
        ),
    ])
}

/// Property patch pointing a page's parent relation at an ancestor's page.
pub fn parent_relation_value(parent_page_id: &str) -> PageProperties {
    PageProperties::from([(
        PARENT_PROPERTY.to_string(),
        PropertyValue::Relation(vec![PageReference {
            id: parent_page_id.to_string(),
        }]),
    )])
}

/// Title-only property values, used for attachment-repository pages.
pub fn title_properties(title: &str) -> PageProperties {
    PageProperties::from([(
        TITLE_PROPERTY.to_string(),
        PropertyValue::Title(vec![RichText::plain(title)]),
    )])
}
