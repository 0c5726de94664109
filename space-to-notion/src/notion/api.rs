//! Reqwest implementation of [`NotionWriter`] against the Notion REST API.

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use tracing::debug;

use super::error::NotionError;
use super::types::{Block, DatabaseSchema, PageProperties, RichText};
use super::writer::NotionWriter;

const API_BASE: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

/// Authenticated Notion API client.
#[derive(Debug, Clone)]
pub struct NotionApi {
    http: Client,
    token: String,
}

impl NotionApi {
    /// Builds a client from an integration token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            token: token.into(),
        }
    }

    /// Sends one API request and returns the decoded response body.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Value,
    ) -> Result<Value, NotionError> {
        debug!(%method, path, "Notion API request");

        let response = self
            .http
            .request(method, format!("{API_BASE}{path}"))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status, response.text().await.unwrap_or_default()));
        }

        Ok(response.json().await?)
    }

    /// Extracts the `id` field every create response carries.
    fn id_of(response: &Value) -> Result<String, NotionError> {
        response["id"]
            .as_str()
            .map(str::to_string)
            .ok_or(NotionError::MissingField { field: "id" })
    }
}

fn api_error(status: StatusCode, body: String) -> NotionError {
    // Notion error bodies carry a human-readable `message`.
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|value| value["message"].as_str().map(str::to_string))
        .unwrap_or(body);

    NotionError::Api {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl NotionWriter for NotionApi {
    async fn create_database(
        &self,
        parent_page_id: &str,
        title: &str,
        schema: DatabaseSchema,
    ) -> Result<String, NotionError> {
        let body = json!({
            "parent": { "page_id": parent_page_id },
            "title": [RichText::plain(title)],
            "properties": schema,
        });

        let response = self.request(Method::POST, "/databases", body).await?;
        Self::id_of(&response)
    }

    async fn update_database_schema(
        &self,
        database_id: &str,
        patch: DatabaseSchema,
    ) -> Result<(), NotionError> {
        let body = json!({ "properties": patch });

        self.request(Method::PATCH, &format!("/databases/{database_id}"), body)
            .await?;
        Ok(())
    }

    async fn create_page(
        &self,
        parent_database_id: &str,
        properties: PageProperties,
        children: Option<Vec<Block>>,
    ) -> Result<String, NotionError> {
        let mut body = json!({
            "parent": { "database_id": parent_database_id },
            "properties": properties,
        });
        if let Some(children) = children {
            body["children"] = json!(children);
        }

        let response = self.request(Method::POST, "/pages", body).await?;
        Self::id_of(&response)
    }

    async fn update_page_properties(
        &self,
        page_id: &str,
        patch: PageProperties,
    ) -> Result<(), NotionError> {
        let body = json!({ "properties": patch });

        self.request(Method::PATCH, &format!("/pages/{page_id}"), body)
            .await?;
        Ok(())
    }

    async fn create_comment(
        &self,
        parent_page_id: &str,
        text: &str,
    ) -> Result<String, NotionError> {
        let body = json!({
            "parent": { "page_id": parent_page_id },
            "rich_text": [RichText::plain(text)],
        });

        let response = self.request(Method::POST, "/comments", body).await?;
        Self::id_of(&response)
    }
}
