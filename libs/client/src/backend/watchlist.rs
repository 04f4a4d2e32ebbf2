//! Watchlist facade

use reqwest::Method;

use crate::backend::read_list;
use crate::error::ClientResult;
use crate::http::BackendClient;
use crate::normalize::RawListItem;

const WATCHLIST_PATH: &str = "/api/watchlist/v2/watchlist";

/// Facade over the watchlist resource
#[derive(Debug, Clone)]
pub struct WatchlistApi {
    client: BackendClient,
}

impl WatchlistApi {
    /// Create the facade
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Add a media reference to the watchlist
    pub async fn add(&self, crossover_id: &str) -> ClientResult<()> {
        let body = serde_json::json!({ "crossoverId": crossover_id });
        self.client
            .execute(Method::POST, WATCHLIST_PATH, Some(body))
            .await
    }

    /// Remove a media reference from the watchlist
    pub async fn remove(&self, crossover_id: &str) -> ClientResult<()> {
        let body = serde_json::json!({ "crossoverId": crossover_id });
        self.client
            .execute(Method::DELETE, WATCHLIST_PATH, Some(body))
            .await
    }

    /// The viewer's watchlist, in backend order; degrades to empty
    pub async fn mine(&self) -> Vec<RawListItem> {
        read_list(&self.client, WATCHLIST_PATH, "watchlist").await
    }
}
