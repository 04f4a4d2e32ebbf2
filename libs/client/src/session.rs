//! Session management for the access/refresh credential pair
//!
//! All credential reads and writes go through [`SessionStore`]; no other
//! module touches the stored tokens directly. Interested parties subscribe
//! to lifecycle events (updated, cleared) through a watch channel.

use std::sync::Arc;

use tokio::sync::{RwLock, watch};
use tracing::info;

/// Access token lifetime in seconds (1 day)
pub const ACCESS_TOKEN_TTL_SECS: i64 = 86_400;

/// Refresh token lifetime in seconds (7 days)
pub const REFRESH_TOKEN_TTL_SECS: i64 = 604_800;

/// Bearer credential pair for an authenticated session.
///
/// The access token is short-lived and the refresh token long-lived; the
/// session is still alive while either is present. In particular an absent
/// access token does not terminate the session as long as a refresh token
/// remains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    /// Short-lived bearer token attached to API calls
    pub access_token: Option<String>,
    /// Longer-lived token exchanged for a new pair on expiry
    pub refresh_token: Option<String>,
}

impl SessionTokens {
    /// Build a pair from whatever credentials are at hand.
    ///
    /// Returns `None` when neither token is present, which is the
    /// logged-out state.
    pub fn from_parts(
        access_token: Option<String>,
        refresh_token: Option<String>,
    ) -> Option<Self> {
        if access_token.is_none() && refresh_token.is_none() {
            return None;
        }
        Some(Self {
            access_token,
            refresh_token,
        })
    }
}

/// Session lifecycle events delivered to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// No session activity yet
    Idle,
    /// A new credential pair was stored
    Updated,
    /// The session was cleared (logout or failed refresh)
    Cleared,
}

/// Single owner of the stored credential pair
#[derive(Debug, Clone)]
pub struct SessionStore {
    tokens: Arc<RwLock<Option<SessionTokens>>>,
    events: watch::Sender<SessionEvent>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_tokens(None)
    }

    /// Create a store seeded with previously persisted credentials
    pub fn with_tokens(tokens: Option<SessionTokens>) -> Self {
        let (events, _) = watch::channel(SessionEvent::Idle);
        Self {
            tokens: Arc::new(RwLock::new(tokens)),
            events,
        }
    }

    /// Seed the store, notifying subscribers
    pub async fn init(&self, tokens: SessionTokens) {
        *self.tokens.write().await = Some(tokens);
        self.events.send_replace(SessionEvent::Updated);
    }

    /// Current credential pair, if any
    pub async fn get(&self) -> Option<SessionTokens> {
        self.tokens.read().await.clone()
    }

    /// Replace the stored pair, notifying subscribers
    pub async fn set(&self, tokens: SessionTokens) {
        *self.tokens.write().await = Some(tokens);
        self.events.send_replace(SessionEvent::Updated);
    }

    /// Drop both credentials, notifying subscribers
    pub async fn clear(&self) {
        info!("Clearing session credentials");
        *self.tokens.write().await = None;
        self.events.send_replace(SessionEvent::Cleared);
    }

    /// Subscribe to session lifecycle events
    pub fn subscribe(&self) -> watch::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Whether any credential is currently stored
    pub async fn is_logged_in(&self) -> bool {
        self.tokens.read().await.is_some()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_requires_at_least_one_token() {
        assert!(SessionTokens::from_parts(None, None).is_none());

        // A refresh token alone keeps the session alive
        let tokens = SessionTokens::from_parts(None, Some("refresh".to_string()))
            .expect("refresh-only session should exist");
        assert!(tokens.access_token.is_none());
        assert_eq!(tokens.refresh_token.as_deref(), Some("refresh"));
    }

    #[tokio::test]
    async fn lifecycle_notifies_subscribers() {
        let store = SessionStore::new();
        let mut events = store.subscribe();
        assert_eq!(*events.borrow(), SessionEvent::Idle);

        store
            .init(SessionTokens {
                access_token: Some("access".to_string()),
                refresh_token: Some("refresh".to_string()),
            })
            .await;
        assert!(events.has_changed().unwrap());
        assert_eq!(*events.borrow_and_update(), SessionEvent::Updated);
        assert!(store.is_logged_in().await);

        store.clear().await;
        assert_eq!(*events.borrow_and_update(), SessionEvent::Cleared);
        assert!(store.get().await.is_none());
    }
}
