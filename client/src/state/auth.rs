//! Authenticated/unauthenticated view of the stored session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and the auth pages to decide what to render
//! without a server round-trip. The token payload is decoded but never
//! verified; the gateway's server responses remain the only authority.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use base64ct::{Base64UrlUnpadded, Encoding};
use serde_json::Value;

use super::session::SessionStore;
use crate::util::clock;

/// Claims read from the token payload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TokenClaims {
    /// Expiry, seconds since the Unix epoch. JWT `NumericDate` may be fractional.
    pub exp: f64,
}

/// Derived session status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    /// No token stored.
    Missing,
    /// Token is not a three-segment JWT with a readable `exp` claim.
    Malformed,
    /// Token expiry is in the past.
    Expired,
    Authenticated,
}

impl AuthStatus {
    pub fn is_authenticated(self) -> bool {
        self == Self::Authenticated
    }
}

/// Decode the middle segment of a `header.payload.signature` token.
///
/// Returns `None` for anything structurally invalid.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return None;
    };
    let payload = payload.trim_end_matches('=');
    if payload.is_empty() {
        return None;
    }
    let bytes = Base64UrlUnpadded::decode_vec(payload).ok()?;
    let claims = serde_json::from_slice::<Value>(&bytes).ok()?;
    let exp = claims.as_object()?.get("exp")?.as_f64().filter(|exp| exp.is_finite())?;
    Some(TokenClaims { exp })
}

/// Classify a raw token at `now_ms`.
pub fn token_status(token: &str, now_ms: i64) -> AuthStatus {
    // Float milliseconds cannot overflow for any finite `exp`.
    #[allow(clippy::cast_precision_loss)]
    let now_ms = now_ms as f64;
    match decode_claims(token) {
        None => AuthStatus::Malformed,
        Some(claims) if now_ms < claims.exp * 1000.0 => AuthStatus::Authenticated,
        Some(_) => AuthStatus::Expired,
    }
}

/// Classify whatever token the store currently holds.
pub fn session_status(session: &SessionStore, now_ms: i64) -> AuthStatus {
    session
        .get()
        .map_or(AuthStatus::Missing, |token| token_status(&token, now_ms))
}

/// Optimistic offline check used for rendering decisions.
pub fn is_authenticated(session: &SessionStore) -> bool {
    let status = session_status(session, clock::now_ms());
    if matches!(status, AuthStatus::Expired | AuthStatus::Malformed) {
        log::debug!("stored session is not usable: {status:?}");
    }
    status.is_authenticated()
}
