//! JSON request/response bodies for the auth API.
//!
//! DESIGN
//! ======
//! Field names follow the server's camelCase schema. Types carrying secrets
//! implement `Debug` by hand so passwords and national IDs never reach logs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// `POST /api/auth/register` body.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub national_id: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("national_id", &"<redacted>")
            .finish()
    }
}

/// `POST /api/auth/login` body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login response.
#[derive(Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `GET /api/profile` response.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub name: String,
    pub email: String,
    pub national_id: String,
    /// ISO-8601 timestamp as sent by the server.
    pub created_at: String,
}

impl fmt::Debug for ProfileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileRecord")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("national_id", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Optional `{ "message": ... }` envelope used by acknowledgements and errors.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    /// Extract a non-blank `message` from a raw body, if the body has one.
    pub fn from_body(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|m| m.message)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty())
    }
}
