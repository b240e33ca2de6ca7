//! API gateway: the single configured client for the remote auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request reads the current token from the [`SessionStore`] and sends
//! it as a bearer credential when present. A 401/403 from any endpoint clears
//! the store and fires the unauthorized hook (the app navigates to `/login`),
//! regardless of which page made the call.
//!
//! ERROR HANDLING
//! ==============
//! All other failures are returned as [`ApiError`] so pages can tell
//! "server unreachable" from "request rejected".

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{BrowserTransport, HttpRequest, HttpResponse, Method, Transport};
use super::types::{ApiMessage, LoginRequest, LoginResponse, ProfileRecord, RegisterRequest};
use crate::config::ApiConfig;
use crate::state::session::SessionStore;

pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const PROFILE_PATH: &str = "/api/profile";

/// Called after a 401/403 has cleared the session.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Gateway type provided through Leptos context.
pub type AppGateway = Gateway<BrowserTransport>;

#[derive(Clone)]
pub struct Gateway<T> {
    config: ApiConfig,
    session: SessionStore,
    transport: T,
    on_unauthorized: Option<UnauthorizedHook>,
}

fn is_session_rejection(status: u16) -> bool {
    matches!(status, 401 | 403)
}

impl<T: Transport> Gateway<T> {
    pub fn new(config: ApiConfig, session: SessionStore, transport: T) -> Self {
        Self { config, session, transport, on_unauthorized: None }
    }

    #[must_use]
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `POST /api/auth/register`. Returns the server's acknowledgement message, if any.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx statuses.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Option<String>, ApiError> {
        let resp = self.send(Method::Post, REGISTER_PATH, Some(encode(request)?)).await?;
        Ok(ApiMessage::from_body(&resp.body))
    }

    /// `POST /api/auth/login`. Returns the session token; storing it is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-2xx statuses, or a
    /// reply without a token.
    pub async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        let resp = self.send(Method::Post, LOGIN_PATH, Some(encode(request)?)).await?;
        let body: LoginResponse = decode(&resp)?;
        if body.token.trim().is_empty() {
            return Err(ApiError::Decode("login response carried an empty token".to_owned()));
        }
        Ok(body.token)
    }

    /// `GET /api/profile`. The server decides whether the attached token is valid.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-2xx statuses, or a
    /// reply that is not a profile record.
    pub async fn fetch_profile(&self) -> Result<ProfileRecord, ApiError> {
        let resp = self.send(Method::Get, PROFILE_PATH, None).await?;
        decode(&resp)
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<HttpResponse, ApiError> {
        let bearer = self.session.get();
        log::debug!("{method} {path} (bearer attached: {})", bearer.is_some());

        let request = HttpRequest {
            method,
            url: self.config.endpoint(path),
            bearer,
            body,
            timeout_ms: self.config.timeout_ms(),
        };
        let resp = self.transport.send(request).await.inspect_err(|e| {
            log::warn!("{method} {path} failed: {e}");
        })?;

        if is_session_rejection(resp.status) {
            log::info!("{method} {path} returned {}; ending session", resp.status);
            self.session.remove();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
            return Err(ApiError::Unauthorized { status: resp.status });
        }
        if !(200..300).contains(&resp.status) {
            log::debug!("{method} {path} rejected with {}", resp.status);
            return Err(ApiError::Rejected { status: resp.status, message: ApiMessage::from_body(&resp.body) });
        }
        Ok(resp)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(resp: &HttpResponse) -> Result<R, ApiError> {
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}
