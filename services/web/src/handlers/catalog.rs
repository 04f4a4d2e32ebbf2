//! Per-kind catalog pages and the media detail page

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::cookie::CookieJar;
use futures::future::join_all;

use client::ClientError;
use client::normalize::normalize_ids;
use client::tmdb::MediaType;

use crate::cookies::sync_jar;
use crate::error::WebResult;
use crate::handlers::viewer_id;
use crate::state::AppState;
use crate::views::{CatalogPage, CommentView, MediaCard, MediaPage};

async fn catalog_page(state: &AppState, media_type: MediaType) -> CatalogPage {
    let tmdb = state.tmdb();
    let (popular, top_rated) = tokio::join!(tmdb.popular(media_type, 1), tmdb.top_rated(media_type, 1));

    CatalogPage {
        media_type,
        popular: popular
            .into_iter()
            .map(|s| MediaCard::from_summary(s, Some(media_type)))
            .collect(),
        top_rated: top_rated
            .into_iter()
            .map(|s| MediaCard::from_summary(s, Some(media_type)))
            .collect(),
    }
}

/// The movies catalog page
pub async fn movies(State(state): State<AppState>) -> Json<CatalogPage> {
    Json(catalog_page(&state, MediaType::Movie).await)
}

/// The series catalog page
pub async fn series(State(state): State<AppState>) -> Json<CatalogPage> {
    Json(catalog_page(&state, MediaType::Tv).await)
}

/// The media detail page: catalog record, the viewer's membership flags,
/// and the comment thread
pub async fn media(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((media_type, id)): Path<(MediaType, u64)>,
) -> WebResult<(CookieJar, Json<MediaPage>)> {
    let api = state.api(&jar);
    let tmdb = state.tmdb();

    let details = tmdb
        .details(media_type, id)
        .await
        .ok_or(ClientError::NotFound)?;

    let crossover_id = id.to_string();
    let (favorites, watchlist, history, comments, viewer) = tokio::join!(
        api.favorites.mine(),
        api.watchlist.mine(),
        api.history.mine(),
        api.comments.for_media(&crossover_id),
        viewer_id(&api),
    );

    let is_favorite = normalize_ids(favorites).contains(&crossover_id);
    let in_watchlist = normalize_ids(watchlist).contains(&crossover_id);
    let in_history = normalize_ids(history).contains(&crossover_id);

    // Resolve each distinct author once
    let mut author_ids: Vec<&str> = comments.iter().map(|c| c.user_id.as_str()).collect();
    author_ids.sort_unstable();
    author_ids.dedup();
    let authors: HashMap<String, String> =
        join_all(author_ids.iter().map(|id| api.auth.user_by_id(id)))
            .await
            .into_iter()
            .flatten()
            .map(|user| (user.id.clone(), user.name))
            .collect();

    let comments = comments
        .into_iter()
        .map(|comment| {
            let author_name = authors.get(&comment.user_id).cloned();
            CommentView::new(comment, author_name, viewer.as_deref())
        })
        .collect();

    let jar = sync_jar(jar, api.session(), state.config.production).await;
    Ok((
        jar,
        Json(MediaPage {
            media_type,
            details,
            is_favorite,
            in_watchlist,
            in_history,
            comments,
        }),
    ))
}
