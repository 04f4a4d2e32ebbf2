//! Follow graph facade
//!
//! Friendship is a directed follow edge; the UI displays it as symmetric
//! but mutation is always viewer-on-target.

use reqwest::Method;

use crate::backend::read_list;
use crate::error::ClientResult;
use crate::http::BackendClient;
use crate::normalize::{RawListItem, normalize_ids};

const FRIENDS_PATH: &str = "/api/friends/v2/friends";

/// Facade over the follow graph
#[derive(Debug, Clone)]
pub struct FriendsApi {
    client: BackendClient,
}

impl FriendsApi {
    /// Create the facade
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Follow a user
    pub async fn follow(&self, target_id: &str) -> ClientResult<()> {
        let body = serde_json::json!({ "targetId": target_id });
        self.client
            .execute(Method::POST, FRIENDS_PATH, Some(body))
            .await
    }

    /// Unfollow a user
    pub async fn unfollow(&self, target_id: &str) -> ClientResult<()> {
        let body = serde_json::json!({ "targetId": target_id });
        self.client
            .execute(Method::DELETE, FRIENDS_PATH, Some(body))
            .await
    }

    /// Ids of the users the viewer follows; degrades to empty
    pub async fn mine(&self) -> Vec<String> {
        let items: Vec<RawListItem> = read_list(&self.client, FRIENDS_PATH, "friends").await;
        normalize_ids(items)
    }

    /// Ids of the users a given user follows; degrades to empty
    pub async fn of_user(&self, user_id: &str) -> Vec<String> {
        let path = format!("{}/{}", FRIENDS_PATH, urlencoding::encode(user_id));
        let items: Vec<RawListItem> = read_list(&self.client, &path, "friends").await;
        normalize_ids(items)
    }
}
