//! Read-only facade over the external metadata catalog
//!
//! All lookups are keyed by API key and locale. The catalog is best-effort:
//! non-success responses and transport failures degrade to empty results
//! rather than propagating, since partial catalogs are acceptable.

use futures::future::join_all;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::normalize::dedup_ids;

/// Default locale for catalog lookups
pub const DEFAULT_LANGUAGE: &str = "pt-BR";

/// The two media kinds exposed by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Movie media type
    Movie,
    /// Series media type
    Tv,
}

impl MediaType {
    /// Path segment used by the catalog API
    pub fn as_path(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Scope selector for the trending feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingKind {
    /// Movies and series combined
    All,
    /// Movies only
    Movie,
    /// Series only
    Tv,
}

impl TrendingKind {
    fn as_path(&self) -> &'static str {
        match self {
            TrendingKind::All => "all",
            TrendingKind::Movie => "movie",
            TrendingKind::Tv => "tv",
        }
    }
}

/// Entry of a catalog list response (search, trending, popular, top rated)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaSummary {
    /// Catalog identifier
    pub id: u64,
    /// Movie title, if a movie
    #[serde(default)]
    pub title: Option<String>,
    /// Series name, if a series
    #[serde(default)]
    pub name: Option<String>,
    /// Synopsis
    #[serde(default)]
    pub overview: Option<String>,
    /// Poster image path
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Average rating
    #[serde(default)]
    pub vote_average: f32,
    /// Media kind tag, present on multi-kind feeds; may name kinds this
    /// application does not handle (e.g. people)
    #[serde(default)]
    pub media_type: Option<String>,
}

impl MediaSummary {
    /// Media kind, when the tag names one this application handles
    pub fn kind(&self) -> Option<MediaType> {
        match self.media_type.as_deref() {
            Some("movie") => Some(MediaType::Movie),
            Some("tv") => Some(MediaType::Tv),
            _ => None,
        }
    }
}

/// Per-id detail record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaDetails {
    /// Catalog identifier
    pub id: u64,
    /// Movie title, if a movie
    #[serde(default)]
    pub title: Option<String>,
    /// Series name, if a series
    #[serde(default)]
    pub name: Option<String>,
    /// Synopsis
    #[serde(default)]
    pub overview: Option<String>,
    /// Poster image path
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Average rating
    #[serde(default)]
    pub vote_average: f32,
    /// Movie release date
    #[serde(default)]
    pub release_date: Option<String>,
    /// Series first air date
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Season count, series only
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    /// Genre tags
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl MediaDetails {
    /// Title for display, whichever field the kind uses
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Untitled")
    }
}

/// Genre tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    /// Catalog genre id
    pub id: u64,
    /// Genre name
    pub name: String,
}

/// Outcome of resolving an untyped catalog id
#[derive(Debug, Clone)]
pub enum MediaLookup {
    /// The id names a movie
    Movie(MediaDetails),
    /// The id names a series
    Series(MediaDetails),
    /// The id matched neither catalog
    Unresolved,
}

impl MediaLookup {
    /// Collapse into a tagged record, dropping unresolved ids
    pub fn into_resolved(self) -> Option<ResolvedMedia> {
        match self {
            MediaLookup::Movie(details) => Some(ResolvedMedia {
                media_type: MediaType::Movie,
                details,
            }),
            MediaLookup::Series(details) => Some(ResolvedMedia {
                media_type: MediaType::Tv,
                details,
            }),
            MediaLookup::Unresolved => None,
        }
    }
}

/// Detail record tagged with its resolved media kind
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedMedia {
    /// Resolved kind
    pub media_type: MediaType,
    /// Catalog detail record
    #[serde(flatten)]
    pub details: MediaDetails,
}

#[derive(Debug, Deserialize)]
struct Page<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

/// Client for the external metadata catalog
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    /// Create a catalog client
    pub fn new(
        http: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            language: language.into(),
        }
    }

    async fn fetch_quietly<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Option<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut query = vec![
            ("api_key", self.api_key.as_str()),
            ("language", self.language.as_str()),
        ];
        query.extend_from_slice(params);

        let response = self.http.get(&url).query(&query).send().await.ok()?;
        if !response.status().is_success() {
            return None;
        }
        response.json().await.ok()
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, &str)]) -> Option<T> {
        let result = self.fetch_quietly(endpoint, params).await;
        if result.is_none() {
            warn!(endpoint, "Catalog lookup failed");
        }
        result
    }

    async fn fetch_list(&self, endpoint: &str, params: &[(&str, &str)]) -> Vec<MediaSummary> {
        self.fetch::<Page<MediaSummary>>(endpoint, params)
            .await
            .map(|page| page.results)
            .unwrap_or_default()
    }

    /// Search movies and series together
    pub async fn search_multi(&self, query: &str) -> Vec<MediaSummary> {
        let mut results = self.fetch_list("/search/multi", &[("query", query)]).await;
        // Multi search also returns people; keep only the kinds we render
        results.retain(|item| item.kind().is_some());
        results
    }

    /// Search movies by title
    pub async fn search_movies(&self, query: &str) -> Vec<MediaSummary> {
        self.fetch_list("/search/movie", &[("query", query)]).await
    }

    /// Search series by name
    pub async fn search_series(&self, query: &str) -> Vec<MediaSummary> {
        self.fetch_list("/search/tv", &[("query", query)]).await
    }

    /// Weekly trending feed
    pub async fn trending(&self, kind: TrendingKind) -> Vec<MediaSummary> {
        let endpoint = format!("/trending/{}/week", kind.as_path());
        self.fetch_list(&endpoint, &[]).await
    }

    /// Popular titles of a kind
    pub async fn popular(&self, media_type: MediaType, page: u32) -> Vec<MediaSummary> {
        let endpoint = format!("/{}/popular", media_type.as_path());
        self.fetch_list(&endpoint, &[("page", &page.to_string())]).await
    }

    /// Top-rated titles of a kind
    pub async fn top_rated(&self, media_type: MediaType, page: u32) -> Vec<MediaSummary> {
        let endpoint = format!("/{}/top_rated", media_type.as_path());
        self.fetch_list(&endpoint, &[("page", &page.to_string())]).await
    }

    /// Detail record for a typed id
    pub async fn details(&self, media_type: MediaType, id: u64) -> Option<MediaDetails> {
        let endpoint = format!("/{}/{}", media_type.as_path(), id);
        self.fetch(&endpoint, &[]).await
    }

    /// Resolve an untyped id by probing the movie catalog first, then the
    /// series catalog. An id matching neither is reported as unresolved.
    pub async fn resolve_media(&self, id: &str) -> MediaLookup {
        if let Some(details) = self
            .fetch_quietly::<MediaDetails>(&format!("/movie/{}", id), &[])
            .await
        {
            return MediaLookup::Movie(details);
        }

        if let Some(details) = self
            .fetch_quietly::<MediaDetails>(&format!("/tv/{}", id), &[])
            .await
        {
            return MediaLookup::Series(details);
        }

        debug!(id, "Catalog id resolved as neither movie nor series");
        MediaLookup::Unresolved
    }

    /// Resolve detail records for a sequence of untyped ids.
    ///
    /// Ids are de-duplicated so each distinct id costs one lookup chain;
    /// lookups run concurrently and unresolved ids are dropped silently.
    pub async fn fetch_details(&self, ids: &[String]) -> Vec<ResolvedMedia> {
        let unique = dedup_ids(ids);
        let lookups = unique.iter().map(|id| self.resolve_media(id));
        join_all(lookups)
            .await
            .into_iter()
            .filter_map(MediaLookup::into_resolved)
            .collect()
    }
}
