//! Typed facades over the backend resources
//!
//! One module per resource, one function per backend capability. Reads
//! swallow failures and degrade to empty results; writes reject with the
//! backend's message or a fallback string.

pub mod auth;
pub mod comments;
pub mod favorites;
pub mod friends;
pub mod history;
pub mod watchlist;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::http::BackendClient;
use crate::normalize::ListEnvelope;
use crate::session::SessionStore;

pub use auth::AuthApi;
pub use comments::CommentsApi;
pub use favorites::FavoritesApi;
pub use friends::FriendsApi;
pub use history::HistoryApi;
pub use watchlist::WatchlistApi;

/// All resource facades bundled behind one backend client
#[derive(Debug, Clone)]
pub struct FrameHubApi {
    client: BackendClient,
    /// Auth, users, and profile operations
    pub auth: AuthApi,
    /// Favorites membership
    pub favorites: FavoritesApi,
    /// Watchlist membership
    pub watchlist: WatchlistApi,
    /// Watch history membership
    pub history: HistoryApi,
    /// Follow graph
    pub friends: FriendsApi,
    /// Comment threads per media reference
    pub comments: CommentsApi,
}

impl FrameHubApi {
    /// Build every facade over the given client
    pub fn new(client: BackendClient) -> Self {
        Self {
            auth: AuthApi::new(client.clone()),
            favorites: FavoritesApi::new(client.clone()),
            watchlist: WatchlistApi::new(client.clone()),
            history: HistoryApi::new(client.clone()),
            friends: FriendsApi::new(client.clone()),
            comments: CommentsApi::new(client.clone()),
            client,
        }
    }

    /// Session store shared by every facade
    pub fn session(&self) -> &SessionStore {
        self.client.session()
    }
}

/// Fetch a list tolerating any of the known response envelopes; failures
/// degrade to an empty sequence.
pub(crate) async fn read_list<T: DeserializeOwned>(
    client: &BackendClient,
    path: &str,
    resource: &'static str,
) -> Vec<T> {
    match client.get_json::<ListEnvelope<T>>(path).await {
        Ok(envelope) => envelope.into_items(),
        Err(error) => {
            warn!(resource, "List read degraded to empty: {}", error);
            Vec::new()
        }
    }
}
