//! Scripted transport and fixtures for gateway and page-flow tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use base64ct::{Base64UrlUnpadded, Encoding};

use super::api::Gateway;
use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::config::ApiConfig;
use crate::state::session::SessionStore;

pub(crate) const BASE_URL: &str = "https://api.example.test";

/// Replays queued responses in order and records every request.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    replies: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub(crate) fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub(crate) fn fail(&self, err: TransportError) -> &Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_owned())))
    }
}

/// Gateway over a fresh in-memory session, plus a counter of unauthorized-hook calls.
pub(crate) fn gateway() -> (Gateway<MockTransport>, MockTransport, Arc<AtomicUsize>) {
    let transport = MockTransport::default();
    let hits = Arc::new(AtomicUsize::new(0));
    let hook_hits = hits.clone();
    let config = ApiConfig::parse(Some(BASE_URL), None).unwrap();
    let gw = Gateway::new(config, SessionStore::in_memory(), transport.clone()).with_unauthorized_hook(move || {
        hook_hits.fetch_add(1, Ordering::SeqCst);
    });
    (gw, transport, hits)
}

/// Unsigned JWT-shaped token with the given `exp`.
pub(crate) fn token_with_exp(exp: i64) -> String {
    let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = Base64UrlUnpadded::encode_string(format!(r#"{{"exp":{exp}}}"#).as_bytes());
    format!("{header}.{payload}.sig")
}

pub(crate) fn live_token() -> String {
    token_with_exp(9_999_999_999)
}
