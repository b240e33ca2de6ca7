use super::*;
use crate::net::test_support::{live_token, token_with_exp};
use crate::state::auth::is_authenticated;

#[test]
fn unauthenticated_profile_visit_redirects_with_from() {
    assert_eq!(
        guard_decision(false, "/profile"),
        GuardDecision::Redirect("/login?from=%2Fprofile".to_owned())
    );
}

#[test]
fn authenticated_visit_is_allowed() {
    assert_eq!(guard_decision(true, "/profile"), GuardDecision::Allowed);
}

#[test]
fn guard_never_allows_without_token() {
    let session = SessionStore::in_memory();
    for path in ["/profile", "/profile/", "/", "/anything?x=1"] {
        assert_ne!(guard_decision(is_authenticated(&session), path), GuardDecision::Allowed);
    }
}

#[test]
fn guard_rejects_expired_token() {
    let session = SessionStore::in_memory();
    session.set(&token_with_exp(1), false).unwrap();
    assert!(matches!(guard_decision(is_authenticated(&session), "/profile"), GuardDecision::Redirect(_)));
}

#[test]
fn guard_allows_live_token() {
    let session = SessionStore::in_memory();
    session.set(&live_token(), true).unwrap();
    assert_eq!(guard_decision(is_authenticated(&session), "/profile"), GuardDecision::Allowed);
}

#[test]
fn root_and_auth_pages_redirect_without_from() {
    assert_eq!(login_redirect_for("/"), "/login");
    assert_eq!(login_redirect_for(""), "/login");
    assert_eq!(login_redirect_for("/login"), "/login");
    assert_eq!(login_redirect_for("/register?x=1"), "/login");
}

#[test]
fn redirect_encodes_query_in_from() {
    assert_eq!(login_redirect_for("/profile?tab=a&b=c"), "/login?from=%2Fprofile%3Ftab%3Da%26b%3Dc");
}

#[test]
fn return_target_defaults_to_profile() {
    assert_eq!(login_return_target(None), "/profile");
    assert_eq!(login_return_target(Some("")), "/profile");
}

#[test]
fn return_target_keeps_local_paths() {
    assert_eq!(login_return_target(Some("/profile")), "/profile");
    assert_eq!(login_return_target(Some("/profile?tab=a")), "/profile?tab=a");
}

#[test]
fn return_target_rejects_offsite_and_auth_pages() {
    for from in ["https://evil.example", "//evil.example", "/\\evil.example", "profile", "/login", "/register/"] {
        assert_eq!(login_return_target(Some(from)), "/profile", "{from}");
    }
}

#[test]
fn logout_twice_matches_logout_once() {
    let session = SessionStore::in_memory();
    session.set(&live_token(), true).unwrap();

    logout(&session);
    let once = (session.get(), session.has_remember_preference());
    logout(&session);
    let twice = (session.get(), session.has_remember_preference());

    assert_eq!(once, (None, false));
    assert_eq!(once, twice);
}
