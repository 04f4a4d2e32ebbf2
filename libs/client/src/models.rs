//! Shared data models for backend resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend user record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Account email
    pub email: String,
    /// Optional profile bio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Identity of the authenticated user, as reported by the `me` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Me {
    /// Backend identifier of the viewer
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Profile fields editable by the owner
#[derive(Debug, Clone, Serialize)]
pub struct UpdateUserRequest {
    /// Display name
    pub name: String,
    /// Profile bio
    pub bio: String,
}

/// Comment attached to a media reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Backend identifier
    pub id: String,
    /// Comment body
    pub content: String,
    /// Author's user id; edit/delete are author-only
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Token payload returned by the login and refresh endpoints.
///
/// Older backend deployments emit the access token under `token` instead of
/// `accessToken`; both are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenGrant {
    /// Access token under its current field name
    #[serde(default, rename = "accessToken")]
    pub access_token: Option<String>,
    /// Access token under its legacy field name
    #[serde(default)]
    pub token: Option<String>,
    /// Refresh token, when the endpoint rotates it
    #[serde(default, rename = "refreshToken")]
    pub refresh_token: Option<String>,
}

impl TokenGrant {
    /// Fold into a credential pair, keeping the caller's refresh token when
    /// the grant did not rotate it. Returns `None` without an access token.
    pub fn into_tokens(
        self,
        current_refresh: Option<String>,
    ) -> Option<crate::session::SessionTokens> {
        let access_token = self.access_token.or(self.token)?;
        Some(crate::session::SessionTokens {
            access_token: Some(access_token),
            refresh_token: self.refresh_token.or(current_refresh),
        })
    }
}

/// Generic `{ data: ... }` envelope used by several backend endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    /// Wrapped payload
    pub data: T,
}
