//! Catalog search

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use client::tmdb::MediaType;

use crate::state::AppState;
use crate::views::{MediaCard, SearchPage};

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Query text
    #[serde(default)]
    pub q: String,
    /// Optional kind filter; absent means both kinds
    pub kind: Option<MediaType>,
}

/// Search the catalog, across both kinds or within one
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchPage> {
    let query = params.q.trim().to_string();
    if query.is_empty() {
        return Json(SearchPage {
            query,
            results: Vec::new(),
        });
    }

    let tmdb = state.tmdb();
    let results = match params.kind {
        None => tmdb
            .search_multi(&query)
            .await
            .into_iter()
            .map(|s| MediaCard::from_summary(s, None))
            .collect(),
        Some(kind) => {
            let summaries = match kind {
                MediaType::Movie => tmdb.search_movies(&query).await,
                MediaType::Tv => tmdb.search_series(&query).await,
            };
            summaries
                .into_iter()
                .map(|s| MediaCard::from_summary(s, Some(kind)))
                .collect()
        }
    };

    Json(SearchPage { query, results })
}
