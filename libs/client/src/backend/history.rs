//! Watch history facade

use reqwest::Method;

use crate::backend::read_list;
use crate::error::ClientResult;
use crate::http::BackendClient;
use crate::normalize::RawListItem;

const HISTORY_PATH: &str = "/api/history/v2/history";

/// Facade over the watch history resource
#[derive(Debug, Clone)]
pub struct HistoryApi {
    client: BackendClient,
}

impl HistoryApi {
    /// Create the facade
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Record a media reference as watched
    pub async fn add(&self, crossover_id: &str) -> ClientResult<()> {
        let body = serde_json::json!({ "crossoverId": crossover_id });
        self.client
            .execute(Method::POST, HISTORY_PATH, Some(body))
            .await
    }

    /// Remove a media reference from the history
    pub async fn remove(&self, crossover_id: &str) -> ClientResult<()> {
        let body = serde_json::json!({ "crossoverId": crossover_id });
        self.client
            .execute(Method::DELETE, HISTORY_PATH, Some(body))
            .await
    }

    /// The viewer's history, in backend order; degrades to empty
    pub async fn mine(&self) -> Vec<RawListItem> {
        read_list(&self.client, HISTORY_PATH, "history").await
    }
}
