//! The viewer's own profile page and profile edits

use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::{Value, json};

use client::ClientError;
use client::models::UpdateUserRequest;

use crate::cookies::sync_jar;
use crate::error::WebResult;
use crate::handlers::media_rail;
use crate::state::AppState;
use crate::views::ProfilePage;

/// Profile edit payload
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    /// Display name
    pub name: String,
    /// Short free-form bio
    pub bio: Option<String>,
}

/// Assemble the viewer's profile page
pub async fn profile(
    State(state): State<AppState>,
    jar: CookieJar,
) -> WebResult<(CookieJar, Json<ProfilePage>)> {
    let api = state.api(&jar);
    let tmdb = state.tmdb();

    let me = api.auth.me().await.ok_or(ClientError::Auth)?;
    let user = api
        .auth
        .user_by_id(&me.user_id)
        .await
        .ok_or(ClientError::NotFound)?;

    let (favorites, watchlist, history, friends) = tokio::join!(
        api.favorites.mine(),
        api.watchlist.mine(),
        api.history.mine(),
        api.friends.mine(),
    );

    let (favorites, watchlist, history) = tokio::join!(
        media_rail(&tmdb, "Favoritos", favorites),
        media_rail(&tmdb, "Minha lista", watchlist),
        media_rail(&tmdb, "Assistidos", history),
    );

    let jar = sync_jar(jar, api.session(), state.config.production).await;
    Ok((
        jar,
        Json(ProfilePage {
            user,
            favorites,
            watchlist,
            history,
            following_count: friends.len(),
        }),
    ))
}

/// Update the viewer's display name and bio
pub async fn update_profile(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<UpdateProfileRequest>,
) -> WebResult<(CookieJar, Json<Value>)> {
    let api = state.api(&jar);

    let me = api.auth.me().await.ok_or(ClientError::Auth)?;
    let update = UpdateUserRequest {
        name: payload.name,
        bio: payload.bio.unwrap_or_default(),
    };
    api.auth.update_user(&me.user_id, &update).await?;

    let jar = sync_jar(jar, api.session(), state.config.production).await;
    Ok((jar, Json(json!({ "ok": true }))))
}
