//! Route guard decisions and session exit.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes and auth pages must agree on where unauthenticated visitors
//! go and where they return to after signing in. Both sides use the helpers
//! here so the `?from=` round trip stays consistent.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use url::form_urlencoded;

use crate::state::session::SessionStore;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const PROFILE_PATH: &str = "/profile";

/// Query key carrying the path a visitor was bounced from.
pub const FROM_PARAM: &str = "from";

/// Outcome of evaluating a protected route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allowed,
    Redirect(String),
}

fn is_auth_page(path: &str) -> bool {
    let bare = path.split(['?', '#']).next().unwrap_or(path);
    matches!(bare.trim_end_matches('/'), LOGIN_PATH | REGISTER_PATH)
}

/// Decide whether `requested_path` renders or bounces to login.
pub fn guard_decision(authenticated: bool, requested_path: &str) -> GuardDecision {
    if authenticated {
        GuardDecision::Allowed
    } else {
        GuardDecision::Redirect(login_redirect_for(requested_path))
    }
}

/// `/login`, plus `?from=<path>` when the path is worth returning to.
pub fn login_redirect_for(requested_path: &str) -> String {
    if requested_path.is_empty() || requested_path == "/" || is_auth_page(requested_path) {
        return LOGIN_PATH.to_owned();
    }
    let encoded: String = form_urlencoded::byte_serialize(requested_path.as_bytes()).collect();
    format!("{LOGIN_PATH}?{FROM_PARAM}={encoded}")
}

/// Where to go after a successful login.
///
/// Only same-origin absolute paths are honoured; anything else (missing,
/// protocol-relative, external, or an auth page) lands on the profile.
pub fn login_return_target(from: Option<&str>) -> String {
    match from.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !is_auth_page(path) =>
        {
            path.to_owned()
        }
        _ => PROFILE_PATH.to_owned(),
    }
}

/// End the local session. Safe to call when already signed out.
pub fn logout(session: &SessionStore) {
    session.remove();
    log::info!("signed out");
}
