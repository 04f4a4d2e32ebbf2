//! Route guard middleware
//!
//! Page navigation is gated on cookie presence only; token validity is
//! settled later by the backend when the page actually calls it. Signed-in
//! visitors are bounced away from the auth pages, signed-out visitors away
//! from everything else.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::cookies::{ACCESS_COOKIE, REFRESH_COOKIE};

/// Outcome of the guard for one navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Let the navigation through
    Allow,
    /// Redirect to the login page
    ToLogin,
    /// Redirect to the home page
    ToHome,
}

fn is_auth_route(path: &str) -> bool {
    matches!(path, "/login" | "/register")
}

/// Whether the guard inspects this path at all
///
/// API calls and static assets pass untouched; only page navigations are
/// gated.
pub fn guard_applies(path: &str) -> bool {
    if path.starts_with("/api/") || path.starts_with("/assets/") {
        return false;
    }
    if path == "/favicon.ico" || path.ends_with(".png") || path.ends_with(".jpg") {
        return false;
    }
    true
}

/// Decide a navigation from the path and cookie presence
pub fn guard_decision(path: &str, has_credentials: bool) -> GuardOutcome {
    if is_auth_route(path) {
        if has_credentials {
            GuardOutcome::ToHome
        } else {
            GuardOutcome::Allow
        }
    } else if has_credentials {
        GuardOutcome::Allow
    } else {
        GuardOutcome::ToLogin
    }
}

/// Guard middleware applied to the page router
pub async fn route_guard(jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    if !guard_applies(&path) {
        return next.run(request).await;
    }

    let has_credentials = jar.get(ACCESS_COOKIE).is_some() || jar.get(REFRESH_COOKIE).is_some();
    match guard_decision(&path, has_credentials) {
        GuardOutcome::Allow => next.run(request).await,
        GuardOutcome::ToLogin => Redirect::to("/login").into_response(),
        GuardOutcome::ToHome => Redirect::to("/").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_and_assets_are_never_gated() {
        assert!(!guard_applies("/api/pages/home"));
        assert!(!guard_applies("/assets/logo.svg"));
        assert!(!guard_applies("/favicon.ico"));
        assert!(!guard_applies("/posters/cover.jpg"));
        assert!(!guard_applies("/banner.png"));
        assert!(guard_applies("/"));
        assert!(guard_applies("/movies"));
    }

    #[test]
    fn signed_out_visitors_are_sent_to_login() {
        assert_eq!(guard_decision("/", false), GuardOutcome::ToLogin);
        assert_eq!(guard_decision("/profile", false), GuardOutcome::ToLogin);
        assert_eq!(guard_decision("/login", false), GuardOutcome::Allow);
        assert_eq!(guard_decision("/register", false), GuardOutcome::Allow);
    }

    #[test]
    fn signed_in_visitors_are_bounced_off_auth_pages() {
        assert_eq!(guard_decision("/login", true), GuardOutcome::ToHome);
        assert_eq!(guard_decision("/register", true), GuardOutcome::ToHome);
        assert_eq!(guard_decision("/", true), GuardOutcome::Allow);
        assert_eq!(guard_decision("/series", true), GuardOutcome::Allow);
    }
}
