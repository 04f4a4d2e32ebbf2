//! Sign-in, sign-up, sign-out, and viewer identity

use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use client::ClientError;

use crate::cookies::sync_jar;
use crate::error::WebResult;
use crate::state::AppState;
use crate::views::SessionView;

/// Login form payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Registration form payload
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
    /// Password typed a second time
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Shell for the login page; the guard keeps signed-in visitors away
pub async fn login_page() -> Json<Value> {
    Json(json!({ "page": "login" }))
}

/// Shell for the registration page
pub async fn register_page() -> Json<Value> {
    Json(json!({ "page": "register" }))
}

/// Authenticate and persist the credential pair in cookies
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> WebResult<(CookieJar, Json<Value>)> {
    let api = state.api(&jar);
    api.auth.login(&payload.email, &payload.password).await?;

    info!("Login succeeded");
    let jar = sync_jar(jar, api.session(), state.config.production).await;
    Ok((jar, Json(json!({ "ok": true }))))
}

/// Create an account; the browser signs in afterwards
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<RegisterRequest>,
) -> WebResult<Json<Value>> {
    let api = state.api(&jar);
    api.auth
        .register(
            &payload.name,
            &payload.email,
            &payload.password,
            &payload.confirm_password,
        )
        .await?;

    info!("Account created");
    Ok(Json(json!({ "ok": true })))
}

/// Drop the session and expire both cookies
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Value>) {
    let api = state.api(&jar);
    api.session().clear().await;

    let jar = sync_jar(jar, api.session(), state.config.production).await;
    (jar, Json(json!({ "ok": true })))
}

/// The signed-in viewer's user record
pub async fn me(
    State(state): State<AppState>,
    jar: CookieJar,
) -> WebResult<(CookieJar, Json<SessionView>)> {
    let api = state.api(&jar);

    let me = api.auth.me().await.ok_or(ClientError::Auth)?;
    let user = api
        .auth
        .user_by_id(&me.user_id)
        .await
        .ok_or(ClientError::NotFound)?;

    let jar = sync_jar(jar, api.session(), state.config.production).await;
    Ok((jar, Json(SessionView { user })))
}
