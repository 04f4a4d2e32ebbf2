//! User directory, user search, and other users' pages

use std::collections::HashSet;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use futures::future::join_all;
use serde::Deserialize;

use client::ClientError;

use crate::cookies::sync_jar;
use crate::error::WebResult;
use crate::handlers::viewer_id;
use crate::state::AppState;
use crate::views::{CommunityPage, UserCard, UserPage};

/// User search query parameters
#[derive(Debug, Deserialize)]
pub struct UserSearchParams {
    /// Name fragment to match
    #[serde(default)]
    pub name: String,
}

/// The community page: everyone except the viewer, tagged with follow state
pub async fn community(
    State(state): State<AppState>,
    jar: CookieJar,
) -> WebResult<(CookieJar, Json<CommunityPage>)> {
    let api = state.api(&jar);

    let (users, following, viewer) =
        tokio::join!(api.auth.all_users(), api.friends.mine(), viewer_id(&api));
    let following: HashSet<String> = following.into_iter().collect();

    let users = users
        .into_iter()
        .filter(|user| Some(user.id.as_str()) != viewer.as_deref())
        .map(|user| {
            let is_followed = following.contains(&user.id);
            UserCard {
                user,
                following: is_followed,
            }
        })
        .collect();

    let jar = sync_jar(jar, api.session(), state.config.production).await;
    Ok((jar, Json(CommunityPage { users })))
}

/// Search users by name, tagged with the viewer's follow state
pub async fn search_users(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<UserSearchParams>,
) -> WebResult<(CookieJar, Json<Vec<UserCard>>)> {
    let api = state.api(&jar);

    let name = params.name.trim();
    let cards = if name.is_empty() {
        Vec::new()
    } else {
        let (users, following) = tokio::join!(api.auth.search_users(name), api.friends.mine());
        let following: HashSet<String> = following.into_iter().collect();
        users
            .into_iter()
            .map(|user| {
                let is_followed = following.contains(&user.id);
                UserCard {
                    user,
                    following: is_followed,
                }
            })
            .collect()
    };

    let jar = sync_jar(jar, api.session(), state.config.production).await;
    Ok((jar, Json(cards)))
}

/// Another user's page: their record and who they follow.
///
/// Visiting your own id lands on the profile page instead.
pub async fn user_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(user_id): Path<String>,
) -> WebResult<Response> {
    let api = state.api(&jar);

    if viewer_id(&api).await.as_deref() == Some(user_id.as_str()) {
        return Ok(Redirect::to("/profile").into_response());
    }

    let user = api
        .auth
        .user_by_id(&user_id)
        .await
        .ok_or(ClientError::NotFound)?;

    let (their_friends, my_friends) =
        tokio::join!(api.friends.of_user(&user_id), api.friends.mine());
    let my_friends: HashSet<String> = my_friends.into_iter().collect();

    let friends = join_all(their_friends.iter().map(|id| api.auth.user_by_id(id)))
        .await
        .into_iter()
        .flatten()
        .map(|friend| {
            let is_followed = my_friends.contains(&friend.id);
            UserCard {
                user: friend,
                following: is_followed,
            }
        })
        .collect();

    let following = my_friends.contains(&user.id);

    let jar = sync_jar(jar, api.session(), state.config.production).await;
    Ok((
        jar,
        Json(UserPage {
            user,
            following,
            friends,
        }),
    )
        .into_response())
}
