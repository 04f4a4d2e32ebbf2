//! Application state shared across handlers

use std::sync::Arc;

use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tokio::sync::Mutex;

use client::backend::FrameHubApi;
use client::http::BackendClient;
use client::optimistic::OptimisticSet;
use client::tmdb::TmdbClient;

use crate::config::WebConfig;
use crate::cookies::session_from_jar;

/// Resource a membership toggle acts on
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleResource {
    /// Favorites list membership
    Favorite,
    /// Watchlist membership
    Watchlist,
    /// Watch history membership
    History,
    /// Follow edge towards another user
    Friend,
}

/// Key identifying one viewer's toggle on one resource entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToggleKey {
    /// Viewer discriminator (the access token in the request jar)
    pub viewer: String,
    /// Resource the toggle acts on
    pub resource: ToggleResource,
    /// Target id (media reference or user id)
    pub id: String,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Web service configuration
    pub config: WebConfig,
    /// In-flight guard and local mirror for membership toggles
    pub toggles: Arc<Mutex<OptimisticSet<ToggleKey>>>,
    http: reqwest::Client,
}

impl AppState {
    /// Build the state from configuration
    pub fn new(config: WebConfig) -> Self {
        Self {
            config,
            toggles: Arc::new(Mutex::new(OptimisticSet::new())),
            http: reqwest::Client::new(),
        }
    }

    /// Backend facade seeded with the credentials in the request jar
    pub fn api(&self, jar: &CookieJar) -> FrameHubApi {
        let session = session_from_jar(jar);
        let backend = BackendClient::new(self.http.clone(), &self.config.backend_url, session);
        FrameHubApi::new(backend)
    }

    /// Metadata catalog client
    pub fn tmdb(&self) -> TmdbClient {
        TmdbClient::new(
            self.http.clone(),
            &self.config.tmdb_base_url,
            &self.config.tmdb_api_key,
            &self.config.tmdb_language,
        )
    }
}
