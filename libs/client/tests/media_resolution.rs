//! Integration tests for untyped-id resolution against the metadata catalog
//!
//! A fake catalog serves a movie under id 5 and a series under id 7; other
//! ids exist in neither catalog. The tests pin the probe order (movie
//! first, then series), the silent dropping of unresolved ids, and the
//! de-duplication of detail lookups.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use client::tmdb::{MediaLookup, MediaType, TmdbClient};

#[derive(Clone)]
struct FakeCatalog {
    movie_hits: Arc<HashMap<String, Arc<AtomicUsize>>>,
    tv_hits: Arc<HashMap<String, Arc<AtomicUsize>>>,
}

impl FakeCatalog {
    fn new(ids: &[&str]) -> Self {
        let counters = |_: &&str| Arc::new(AtomicUsize::new(0));
        Self {
            movie_hits: Arc::new(ids.iter().map(|id| (id.to_string(), counters(id))).collect()),
            tv_hits: Arc::new(ids.iter().map(|id| (id.to_string(), counters(id))).collect()),
        }
    }

    fn movie_probes(&self, id: &str) -> usize {
        self.movie_hits[id].load(Ordering::SeqCst)
    }

    fn tv_probes(&self, id: &str) -> usize {
        self.tv_hits[id].load(Ordering::SeqCst)
    }
}

async fn movie_endpoint(State(state): State<FakeCatalog>, Path(id): Path<String>) -> Response {
    if let Some(hits) = state.movie_hits.get(&id) {
        hits.fetch_add(1, Ordering::SeqCst);
    }
    match id.as_str() {
        "5" => Json(json!({ "id": 5, "title": "The Fifth Element", "vote_average": 7.5 }))
            .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "status_code": 34, "status_message": "Not found" })),
        )
            .into_response(),
    }
}

async fn tv_endpoint(State(state): State<FakeCatalog>, Path(id): Path<String>) -> Response {
    if let Some(hits) = state.tv_hits.get(&id) {
        hits.fetch_add(1, Ordering::SeqCst);
    }
    match id.as_str() {
        "7" => Json(json!({ "id": 7, "name": "Severance", "number_of_seasons": 2 }))
            .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "status_code": 34, "status_message": "Not found" })),
        )
            .into_response(),
    }
}

async fn spawn_catalog(state: FakeCatalog) -> String {
    let app = Router::new()
        .route("/movie/:id", get(movie_endpoint))
        .route("/tv/:id", get(tv_endpoint))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake catalog");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve fake catalog");
    });

    format!("http://{}", addr)
}

fn catalog_client(base_url: &str) -> TmdbClient {
    TmdbClient::new(reqwest::Client::new(), base_url, "test-key", "pt-BR")
}

#[tokio::test]
async fn series_only_id_resolves_as_tv_after_failed_movie_probe() {
    let catalog = FakeCatalog::new(&["5", "7", "9"]);
    let base_url = spawn_catalog(catalog.clone()).await;
    let tmdb = catalog_client(&base_url);

    let lookup = tmdb.resolve_media("7").await;
    let resolved = match lookup {
        MediaLookup::Series(details) => details,
        other => panic!("expected a series, got {:?}", other),
    };
    assert_eq!(resolved.display_title(), "Severance");

    // The movie catalog was probed first and missed
    assert_eq!(catalog.movie_probes("7"), 1);
    assert_eq!(catalog.tv_probes("7"), 1);
}

#[tokio::test]
async fn movie_id_resolves_without_touching_the_series_catalog() {
    let catalog = FakeCatalog::new(&["5", "7", "9"]);
    let base_url = spawn_catalog(catalog.clone()).await;
    let tmdb = catalog_client(&base_url);

    assert!(matches!(
        tmdb.resolve_media("5").await,
        MediaLookup::Movie(_)
    ));
    assert_eq!(catalog.movie_probes("5"), 1);
    assert_eq!(catalog.tv_probes("5"), 0);
}

#[tokio::test]
async fn duplicate_ids_cost_a_single_lookup_chain() {
    let catalog = FakeCatalog::new(&["5", "7", "9"]);
    let base_url = spawn_catalog(catalog.clone()).await;
    let tmdb = catalog_client(&base_url);

    let ids = vec!["5".to_string(), "5".to_string(), "7".to_string()];
    let resolved = tmdb.fetch_details(&ids).await;

    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].media_type, MediaType::Movie);
    assert_eq!(resolved[1].media_type, MediaType::Tv);

    // "5" repeated twice still probes the movie catalog exactly once
    assert_eq!(catalog.movie_probes("5"), 1);
    assert_eq!(catalog.movie_probes("7"), 1);
}

#[tokio::test]
async fn unresolved_ids_are_dropped_silently() {
    let catalog = FakeCatalog::new(&["5", "7", "9"]);
    let base_url = spawn_catalog(catalog.clone()).await;
    let tmdb = catalog_client(&base_url);

    let ids = vec!["9".to_string(), "5".to_string()];
    let resolved = tmdb.fetch_details(&ids).await;

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].details.id, 5);

    // The unknown id exhausted both probes before being dropped
    assert_eq!(catalog.movie_probes("9"), 1);
    assert_eq!(catalog.tv_probes("9"), 1);
}
