//! Page and action handlers
//!
//! One module per page group. Every handler seeds its backend facade from
//! the request jar and writes the (possibly rotated) credential pair back
//! into the response jar.

pub mod actions;
pub mod auth;
pub mod catalog;
pub mod community;
pub mod home;
pub mod profile;
pub mod search;
pub mod users;

use client::backend::FrameHubApi;
use client::normalize::{RawListItem, display_ids};
use client::tmdb::TmdbClient;

use crate::views::Rail;

/// Resolve a raw membership list into a display-ordered rail
pub(crate) async fn media_rail(tmdb: &TmdbClient, title: &str, raw: Vec<RawListItem>) -> Rail {
    let ids = display_ids(raw);
    let resolved = tmdb.fetch_details(&ids).await;
    Rail::from_resolved(title, resolved)
}

/// Id of the signed-in viewer, when the session still resolves one
pub(crate) async fn viewer_id(api: &FrameHubApi) -> Option<String> {
    api.auth.me().await.map(|me| me.user_id)
}
