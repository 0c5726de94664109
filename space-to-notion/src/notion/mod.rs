//! The Notion side of the migration: write surface, request types, and the
//! property builders shared by the engine.

mod api;
mod error;
pub mod properties;
mod types;
mod writer;

pub use api::NotionApi;
pub use error::NotionError;
pub use types::{
    Block, DatabaseSchema, EmptyObject, PageProperties, PageReference, PropertySchema,
    PropertyValue, RichText, SelectOption, TextContent,
};
pub use writer::NotionWriter;
