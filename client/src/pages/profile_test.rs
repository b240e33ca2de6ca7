use std::sync::atomic::Ordering;

use futures::executor::block_on;

use super::*;
use crate::net::error::{SESSION_ENDED_MESSAGE, UNREACHABLE_MESSAGE};
use crate::net::test_support::{gateway, live_token};
use crate::net::transport::TransportError;

const PROFILE_BODY: &str =
    r#"{"name":"Ana Lima","email":"ana@example.com","nationalId":"123456789012","createdAt":"2024-01-15T10:00:00Z"}"#;

#[test]
fn loaded_profile_is_masked_and_formatted() {
    let (gw, transport, _) = gateway();
    gw.session().set(&live_token(), false).unwrap();
    transport.reply(200, PROFILE_BODY);

    let state = block_on(load_profile(&gw));

    assert_eq!(
        state,
        ProfileState::Loaded(ProfileSummary {
            name: "Ana Lima".to_owned(),
            email: "ana@example.com".to_owned(),
            masked_national_id: "XXXX-XXXX-9012".to_owned(),
            member_since: "January 15, 2024".to_owned(),
        })
    );
}

#[test]
fn summary_debug_never_shows_full_national_id() {
    let (gw, transport, _) = gateway();
    transport.reply(200, PROFILE_BODY);

    let state = block_on(load_profile(&gw));
    assert!(!format!("{state:?}").contains("123456789012"));
}

#[test]
fn forbidden_ends_session_and_fires_hook() {
    let (gw, transport, hits) = gateway();
    gw.session().set(&live_token(), true).unwrap();
    transport.reply(403, "");

    let state = block_on(load_profile(&gw));

    assert_eq!(state, ProfileState::Failed(SESSION_ENDED_MESSAGE.to_owned()));
    assert_eq!(gw.session().get(), None);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn server_error_offers_fallback_message() {
    let (gw, transport, _) = gateway();
    transport.reply(500, "");

    assert_eq!(block_on(load_profile(&gw)), ProfileState::Failed(PROFILE_FAILED_MESSAGE.to_owned()));
}

#[test]
fn unreachable_then_retry_succeeds() {
    let (gw, transport, _) = gateway();
    transport.fail(TransportError::Network("offline".to_owned())).reply(200, PROFILE_BODY);

    assert_eq!(block_on(load_profile(&gw)), ProfileState::Failed(UNREACHABLE_MESSAGE.to_owned()));
    assert!(matches!(block_on(load_profile(&gw)), ProfileState::Loaded(_)));
    assert_eq!(transport.requests().len(), 2);
}

#[test]
fn logout_waits_for_confirmation() {
    let (gw, _, _) = gateway();
    let token = live_token();
    gw.session().set(&token, true).unwrap();

    assert!(!confirm_logout(gw.session(), false));
    assert_eq!(gw.session().get(), Some(token));

    assert!(confirm_logout(gw.session(), true));
    assert_eq!(gw.session().get(), None);
    assert!(!gw.session().has_remember_preference());
}

#[test]
fn confirmed_logout_is_idempotent() {
    let (gw, _, _) = gateway();
    assert!(confirm_logout(gw.session(), true));
    assert!(confirm_logout(gw.session(), true));
    assert_eq!(gw.session().get(), None);
}
