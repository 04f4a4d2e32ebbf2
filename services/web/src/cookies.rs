//! Cookie persistence for the session token pair
//!
//! The browser holds the pair in two HttpOnly cookies. Every handler
//! seeds its session store from the jar and writes the (possibly
//! rotated) pair back after the backend calls are done.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use client::session::{
    ACCESS_TOKEN_TTL_SECS, REFRESH_TOKEN_TTL_SECS, SessionStore, SessionTokens,
};

/// Cookie carrying the short-lived access token
pub const ACCESS_COOKIE: &str = "framehub_token";
/// Cookie carrying the long-lived refresh token
pub const REFRESH_COOKIE: &str = "framehub_refresh_token";

fn token_cookie(name: &'static str, value: String, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::seconds(max_age_secs))
        .build()
}

fn removal_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}

/// Seed a session store from the request jar
pub fn session_from_jar(jar: &CookieJar) -> SessionStore {
    let access_token = jar.get(ACCESS_COOKIE).map(|c| c.value().to_string());
    let refresh_token = jar.get(REFRESH_COOKIE).map(|c| c.value().to_string());

    if access_token.is_none() && refresh_token.is_none() {
        return SessionStore::new();
    }
    SessionStore::with_tokens(Some(SessionTokens {
        access_token,
        refresh_token,
    }))
}

/// Write the session's current token pair back into the jar
///
/// A cleared session removes both cookies, so a failed refresh logs the
/// browser out on the next response.
pub async fn sync_jar(jar: CookieJar, session: &SessionStore, secure: bool) -> CookieJar {
    match session.get().await {
        Some(tokens) => {
            let jar = match tokens.access_token {
                Some(access) => jar.add(token_cookie(
                    ACCESS_COOKIE,
                    access,
                    ACCESS_TOKEN_TTL_SECS,
                    secure,
                )),
                None => jar.remove(removal_cookie(ACCESS_COOKIE)),
            };
            match tokens.refresh_token {
                Some(refresh) => jar.add(token_cookie(
                    REFRESH_COOKIE,
                    refresh,
                    REFRESH_TOKEN_TTL_SECS,
                    secure,
                )),
                None => jar.remove(removal_cookie(REFRESH_COOKIE)),
            }
        }
        None => jar
            .remove(removal_cookie(ACCESS_COOKIE))
            .remove(removal_cookie(REFRESH_COOKIE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn jar_round_trips_a_token_pair() {
        let session = SessionStore::with_tokens(Some(SessionTokens {
            access_token: Some("a-1".to_string()),
            refresh_token: Some("r-1".to_string()),
        }));

        let jar = sync_jar(CookieJar::new(), &session, false).await;
        assert_eq!(jar.get(ACCESS_COOKIE).map(|c| c.value()), Some("a-1"));
        assert_eq!(jar.get(REFRESH_COOKIE).map(|c| c.value()), Some("r-1"));

        let seeded = session_from_jar(&jar);
        let tokens = seeded.get().await.expect("tokens survive the jar");
        assert_eq!(tokens.access_token.as_deref(), Some("a-1"));
        assert_eq!(tokens.refresh_token.as_deref(), Some("r-1"));
    }

    #[tokio::test]
    async fn cleared_session_removes_both_cookies() {
        let session = SessionStore::with_tokens(Some(SessionTokens {
            access_token: Some("a-1".to_string()),
            refresh_token: Some("r-1".to_string()),
        }));
        let jar = sync_jar(CookieJar::new(), &session, false).await;

        session.clear().await;
        let jar = sync_jar(jar, &session, false).await;
        assert!(jar.get(ACCESS_COOKIE).is_none());
        assert!(jar.get(REFRESH_COOKIE).is_none());
    }

    #[tokio::test]
    async fn empty_jar_seeds_an_idle_session() {
        let session = session_from_jar(&CookieJar::new());
        assert!(!session.is_logged_in().await);
    }
}
