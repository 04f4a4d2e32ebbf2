//! Comments facade
//!
//! Comments attach to a media reference. Edit and delete are author-only;
//! the backend enforces this and the UI mirrors it with an ownership check.

use reqwest::Method;

use crate::backend::read_list;
use crate::error::{ClientError, ClientResult};
use crate::http::BackendClient;
use crate::models::Comment;

const COMMENTS_PATH: &str = "/api/comments/v2/comments";

fn validate_content(content: &str) -> ClientResult<()> {
    if content.trim().is_empty() {
        return Err(ClientError::Validation {
            field: "content".to_string(),
            message: "Comment cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Facade over the comments resource
#[derive(Debug, Clone)]
pub struct CommentsApi {
    client: BackendClient,
}

impl CommentsApi {
    /// Create the facade
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Comments attached to a media reference; degrades to empty
    pub async fn for_media(&self, crossover_id: &str) -> Vec<Comment> {
        let path = format!("{}/{}", COMMENTS_PATH, urlencoding::encode(crossover_id));
        read_list(&self.client, &path, "comments").await
    }

    /// Attach a comment to a media reference
    pub async fn add(&self, crossover_id: &str, content: &str) -> ClientResult<()> {
        validate_content(content)?;
        let body = serde_json::json!({ "crossoverId": crossover_id, "content": content });
        self.client
            .execute(Method::POST, COMMENTS_PATH, Some(body))
            .await
    }

    /// Edit a comment's body (author only)
    pub async fn update(&self, comment_id: &str, content: &str) -> ClientResult<()> {
        validate_content(content)?;
        let path = format!("{}/{}", COMMENTS_PATH, urlencoding::encode(comment_id));
        let body = serde_json::json!({ "content": content });
        self.client.execute(Method::PUT, &path, Some(body)).await
    }

    /// Delete a comment (author only)
    pub async fn delete(&self, comment_id: &str) -> ClientResult<()> {
        let path = format!("{}/{}", COMMENTS_PATH, urlencoding::encode(comment_id));
        self.client.execute(Method::DELETE, &path, None).await
    }
}
