//! Logical request types for the Notion write surface.
//!
//! These model the shapes the Notion API expects (externally tagged by
//! property/block kind) closely enough to serialize straight into request
//! bodies, without pulling in a full API binding.

use std::collections::HashMap;

use serde::Serialize;

/// Plain text content of a rich-text fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    pub content: String,
}

/// One rich-text fragment. Only plain text is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichText {
    pub text: TextContent,
}

impl RichText {
    /// A single plain-text fragment.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            text: TextContent {
                content: content.into(),
            },
        }
    }
}

/// One option of a select property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub name: String,
}

/// Serializes as `{}`; Notion marks parameterless schema kinds this way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmptyObject {}

/// Schema of one database property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertySchema {
    /// The mandatory title property.
    Title(EmptyObject),

    /// A single-select property with a fixed option list.
    Select { options: Vec<SelectOption> },

    /// A dual relation to another (possibly the same) database.
    Relation {
        database_id: String,
        dual_property: EmptyObject,
    },
}

/// A database schema or schema patch, keyed by property name.
pub type DatabaseSchema = HashMap<String, PropertySchema>;

/// Reference to a page, as used inside relation values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReference {
    pub id: String,
}

/// Value of one page property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    /// Title rich text.
    Title(Vec<RichText>),

    /// Chosen select option.
    Select(SelectOption),

    /// Pages this page relates to.
    Relation(Vec<PageReference>),
}

/// Page property values or a property patch, keyed by property name.
pub type PageProperties = HashMap<String, PropertyValue>;

/// One unit of page body content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of plain text.
    Paragraph { rich_text: Vec<RichText> },

    /// A link to another page.
    LinkToPage { page_id: String },
}

impl Block {
    /// A paragraph holding one plain-text fragment.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph {
            rich_text: vec![RichText::plain(text)],
        }
    }

    /// A link block pointing at an existing page.
    pub fn link_to_page(page_id: impl Into<String>) -> Self {
        Self::LinkToPage {
            page_id: page_id.into(),
        }
    }
}
