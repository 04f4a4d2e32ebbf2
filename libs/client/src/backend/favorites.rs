//! Favorites facade

use reqwest::Method;

use crate::backend::read_list;
use crate::error::ClientResult;
use crate::http::BackendClient;
use crate::normalize::RawListItem;

const FAVORITES_PATH: &str = "/api/favorites/v2/favorite";

/// Facade over the favorites resource
#[derive(Debug, Clone)]
pub struct FavoritesApi {
    client: BackendClient,
}

impl FavoritesApi {
    /// Create the facade
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Favorite a media reference
    pub async fn add(&self, crossover_id: &str) -> ClientResult<()> {
        let body = serde_json::json!({ "crossoverId": crossover_id });
        self.client
            .execute(Method::POST, FAVORITES_PATH, Some(body))
            .await
    }

    /// Remove a media reference from the favorites
    pub async fn remove(&self, crossover_id: &str) -> ClientResult<()> {
        let body = serde_json::json!({ "crossoverId": crossover_id });
        self.client
            .execute(Method::DELETE, FAVORITES_PATH, Some(body))
            .await
    }

    /// The viewer's favorites, in backend order; degrades to empty
    pub async fn mine(&self) -> Vec<RawListItem> {
        read_list(&self.client, FAVORITES_PATH, "favorites").await
    }
}
