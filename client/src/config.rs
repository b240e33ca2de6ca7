//! API gateway configuration baked in at WASM build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle is built with `API_BASE_URL` (required) and `API_TIMEOUT_MS`
//! (optional) in the environment. A missing or unusable base address is a
//! startup error: the app renders a configuration notice instead of talking
//! to whatever host happens to be local.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use url::Url;

pub const DEFAULT_API_TIMEOUT_MS: u32 = 10_000;

/// Errors raised while building [`ApiConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API_BASE_URL is not set")]
    MissingBaseUrl,
    #[error("API_BASE_URL is not a valid http(s) address: {0}")]
    InvalidBaseUrl(String),
    #[error("API_TIMEOUT_MS must be a positive integer, got {0:?}")]
    InvalidTimeout(String),
}

/// Resolved remote API settings shared by every gateway request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    timeout_ms: u32,
}

impl ApiConfig {
    /// Build config from the variables captured by `option_env!` at compile time.
    ///
    /// # Errors
    ///
    /// See [`ApiConfig::parse`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::parse(option_env!("API_BASE_URL"), option_env!("API_TIMEOUT_MS"))
    }

    /// Parse raw setting values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] when the base address is absent
    /// or blank, [`ConfigError::InvalidBaseUrl`] when it is not an absolute
    /// http(s) URL, and [`ConfigError::InvalidTimeout`] when the timeout is not
    /// a positive integer.
    pub fn parse(base_url: Option<&str>, timeout_ms: Option<&str>) -> Result<Self, ConfigError> {
        let raw = base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;

        let mut url = Url::parse(raw).map_err(|_| ConfigError::InvalidBaseUrl(raw.to_owned()))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
        }
        // Endpoint joins are relative, so the path must end in a slash to keep any prefix.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);

        let timeout_ms = match timeout_ms.map(str::trim).filter(|v| !v.is_empty()) {
            None => DEFAULT_API_TIMEOUT_MS,
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(v.to_owned()))?,
        };

        Ok(Self { base_url: url, timeout_ms })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Absolute URL for an API path such as `/api/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        let relative = path.trim_start_matches('/');
        self.base_url
            .join(relative)
            .map_or_else(|_| format!("{}{relative}", self.base_url), String::from)
    }
}
