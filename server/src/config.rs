//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_ROOT: &str = "client/dist";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("site root {} has no index.html", .0.display())]
    MissingIndex(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site_root: PathBuf,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: default `client/dist`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("PORT").ok().as_deref(), std::env::var("SITE_ROOT").ok().as_deref())
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `port` is not a port number.
    pub fn from_values(port: Option<&str>, site_root: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim).filter(|v| !v.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        };
        let site_root = site_root
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_SITE_ROOT), PathBuf::from);
        Ok(Self { port, site_root })
    }

    pub fn index_path(&self) -> PathBuf {
        self.site_root.join("index.html")
    }

    /// Every unknown path is answered with `index.html`, so it must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingIndex`] when the file is absent.
    pub fn validate_site(&self) -> Result<(), ConfigError> {
        if self.index_path().is_file() {
            Ok(())
        } else {
            Err(ConfigError::MissingIndex(self.site_root.clone()))
        }
    }
}
