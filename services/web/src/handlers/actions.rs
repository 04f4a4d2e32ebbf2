//! Membership toggle actions (favorite, watchlist, history, follow)
//!
//! Each toggle is applied optimistically against a local mirror before the
//! backend answers, with a per-key in-flight guard so a double-click cannot
//! issue two overlapping requests for the same target. On failure the
//! mirror reverts and the response carries the backend's message.

use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::warn;

use client::ClientError;
use client::backend::FrameHubApi;

use crate::cookies::{ACCESS_COOKIE, REFRESH_COOKIE, sync_jar};
use crate::error::WebResult;
use crate::state::{AppState, ToggleKey, ToggleResource};
use crate::views::ActionResponse;

/// Toggle payload
#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    /// Target id (media reference, or user id for follows)
    pub id: String,
    /// Desired membership state
    pub active: bool,
}

fn viewer_discriminator(jar: &CookieJar) -> Option<String> {
    jar.get(ACCESS_COOKIE)
        .or_else(|| jar.get(REFRESH_COOKIE))
        .map(|cookie| cookie.value().to_string())
}

async fn apply(api: &FrameHubApi, resource: &ToggleResource, id: &str, active: bool) -> Result<(), ClientError> {
    match (resource, active) {
        (ToggleResource::Favorite, true) => api.favorites.add(id).await,
        (ToggleResource::Favorite, false) => api.favorites.remove(id).await,
        (ToggleResource::Watchlist, true) => api.watchlist.add(id).await,
        (ToggleResource::Watchlist, false) => api.watchlist.remove(id).await,
        (ToggleResource::History, true) => api.history.add(id).await,
        (ToggleResource::History, false) => api.history.remove(id).await,
        (ToggleResource::Friend, true) => api.friends.follow(id).await,
        (ToggleResource::Friend, false) => api.friends.unfollow(id).await,
    }
}

/// Toggle membership of a target in one of the viewer's lists
pub async fn toggle(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(resource): Path<ToggleResource>,
    Json(payload): Json<ToggleRequest>,
) -> WebResult<(CookieJar, Json<ActionResponse>)> {
    let viewer = viewer_discriminator(&jar).ok_or(ClientError::Auth)?;
    let api = state.api(&jar);

    let key = ToggleKey {
        viewer,
        resource: resource.clone(),
        id: payload.id.clone(),
    };

    let receipt = {
        let mut toggles = state.toggles.lock().await;
        // Seed the mirror so the flip lands on the requested state; a key
        // with an outstanding toggle keeps its optimistic value
        toggles.set_membership(key.clone(), !payload.active);
        toggles.begin(key.clone())
    };

    let Some(receipt) = receipt else {
        let toggles = state.toggles.lock().await;
        return Ok((
            jar,
            Json(ActionResponse {
                ok: false,
                active: toggles.contains(&key),
                notice: Some("Hold on, the previous change is still saving.".to_string()),
            }),
        ));
    };

    let outcome = apply(&api, &resource, &payload.id, payload.active).await;

    let response = {
        let mut toggles = state.toggles.lock().await;
        let response = match outcome {
            Ok(()) => {
                toggles.commit(receipt);
                ActionResponse {
                    ok: true,
                    active: payload.active,
                    notice: None,
                }
            }
            Err(error) => {
                warn!(?resource, "Toggle rejected: {}", error);
                toggles.revert(receipt);
                ActionResponse {
                    ok: false,
                    active: toggles.contains(&key),
                    notice: Some(error.user_message()),
                }
            }
        };
        // Membership is re-seeded from the backend on every request, so a
        // settled key can be evicted; access tokens rotate and would
        // otherwise pile up in the mirror
        toggles.forget(&key);
        response
    };

    let jar = sync_jar(jar, api.session(), state.config.production).await;
    Ok((jar, Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::routing::post;
    use axum_extra::extract::cookie::Cookie;
    use serde_json::json;

    use crate::config::WebConfig;

    async fn spawn_backend() -> String {
        let app = Router::new().route(
            "/api/favorites/v2/favorite",
            post(|| async { Json(json!({ "ok": true })) }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake backend");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve fake backend");
        });

        format!("http://{}", addr)
    }

    fn test_state(backend_url: &str) -> AppState {
        AppState::new(WebConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            backend_url: backend_url.to_string(),
            tmdb_base_url: "http://localhost:9090".to_string(),
            tmdb_api_key: "test".to_string(),
            tmdb_language: "pt-BR".to_string(),
            production: false,
        })
    }

    #[tokio::test]
    async fn settled_toggles_leave_no_mirror_residue() {
        let backend_url = spawn_backend().await;
        let state = test_state(&backend_url);
        let jar = CookieJar::new().add(Cookie::new(ACCESS_COOKIE, "access-1"));

        // Distinct targets, each committed; the mirror must not accumulate
        for i in 0..20 {
            let (_, Json(response)) = toggle(
                State(state.clone()),
                jar.clone(),
                Path(ToggleResource::Favorite),
                Json(ToggleRequest {
                    id: i.to_string(),
                    active: true,
                }),
            )
            .await
            .expect("toggle should succeed");
            assert!(response.ok);
            assert!(response.active);
        }

        let toggles = state.toggles.lock().await;
        for i in 0..20 {
            let key = ToggleKey {
                viewer: "access-1".to_string(),
                resource: ToggleResource::Favorite,
                id: i.to_string(),
            };
            assert!(!toggles.contains(&key));
            assert!(!toggles.is_in_flight(&key));
        }
    }
}
