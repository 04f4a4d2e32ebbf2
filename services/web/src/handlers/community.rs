//! Comment thread mutations

use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::cookies::sync_jar;
use crate::error::WebResult;
use crate::state::AppState;

/// New comment payload
#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    /// Media reference the comment attaches to
    #[serde(rename = "crossoverId")]
    pub crossover_id: String,
    /// Comment body
    pub content: String,
}

/// Comment edit payload
#[derive(Debug, Deserialize)]
pub struct EditCommentRequest {
    /// Replacement body
    pub content: String,
}

/// Attach a comment to a media reference
pub async fn add_comment(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<AddCommentRequest>,
) -> WebResult<(CookieJar, Json<Value>)> {
    let api = state.api(&jar);
    api.comments
        .add(&payload.crossover_id, &payload.content)
        .await?;

    let jar = sync_jar(jar, api.session(), state.config.production).await;
    Ok((jar, Json(json!({ "ok": true }))))
}

/// Edit a comment's body (author only, enforced server-side)
pub async fn edit_comment(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(comment_id): Path<String>,
    Json(payload): Json<EditCommentRequest>,
) -> WebResult<(CookieJar, Json<Value>)> {
    let api = state.api(&jar);
    api.comments.update(&comment_id, &payload.content).await?;

    let jar = sync_jar(jar, api.session(), state.config.production).await;
    Ok((jar, Json(json!({ "ok": true }))))
}

/// Delete a comment (author only, enforced server-side)
pub async fn delete_comment(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(comment_id): Path<String>,
) -> WebResult<(CookieJar, Json<Value>)> {
    let api = state.api(&jar);
    api.comments.delete(&comment_id).await?;

    let jar = sync_jar(jar, api.session(), state.config.production).await;
    Ok((jar, Json(json!({ "ok": true }))))
}
