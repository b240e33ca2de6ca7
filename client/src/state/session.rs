//! Persisted session token and remember-me preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is built at app start and provided via context. The
//! gateway reads it for every request, pages write it after login/logout, and
//! the gateway's 401/403 handler clears it.
//!
//! STORAGE LAYOUT
//! ==============
//! Remembered logins keep the token in the persistent scope (`localStorage`)
//! next to `auth_remember_me = "true"`. Other logins keep it in the tab scope
//! (`sessionStorage`). Only one scope holds a token at any time.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::util::storage::BrowserStorage;

pub const TOKEN_KEY: &str = "auth_token";
pub const REMEMBER_KEY: &str = "auth_remember_me";

/// Failure writing to a key-value surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available in this environment")]
    Unavailable,
    #[error("storage rejected the write: {0}")]
    WriteRejected(String),
}

/// Minimal string key-value surface the session is persisted to.
///
/// Implementations must be cheap to share: the browser implementation
/// re-acquires the Web Storage handle on every call.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] when the value could not be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str);
}

/// In-process store used by tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Owner of the session token. Cloning shares the same underlying storage.
#[derive(Clone)]
pub struct SessionStore {
    persistent: Arc<dyn KeyValueStore>,
    tab: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(persistent: impl KeyValueStore + 'static, tab: impl KeyValueStore + 'static) -> Self {
        Self { persistent: Arc::new(persistent), tab: Arc::new(tab) }
    }

    /// Store backed by `localStorage` (remembered) and `sessionStorage` (tab).
    pub fn browser() -> Self {
        Self::new(BrowserStorage::Local, BrowserStorage::Session)
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::default(), MemoryStore::default())
    }

    /// Replace any existing token.
    ///
    /// A non-remembered login also clears an earlier remember preference, so
    /// the flag always describes the most recent login.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the token could not be written.
    pub fn set(&self, token: &str, remember_me: bool) -> Result<(), StorageError> {
        let (target, other) = if remember_me {
            (&self.persistent, &self.tab)
        } else {
            (&self.tab, &self.persistent)
        };
        // A failed write leaves the previous session intact.
        target.set(TOKEN_KEY, token).inspect_err(|e| {
            log::warn!("session token not stored: {e}");
        })?;
        other.remove(TOKEN_KEY);

        if remember_me {
            if let Err(e) = self.persistent.set(REMEMBER_KEY, "true") {
                log::warn!("remember preference not stored: {e}");
            }
        } else {
            self.persistent.remove(REMEMBER_KEY);
        }
        log::debug!("session token stored (remember_me={remember_me})");
        Ok(())
    }

    pub fn get(&self) -> Option<String> {
        self.tab
            .get(TOKEN_KEY)
            .filter(|t| !t.is_empty())
            .or_else(|| self.persistent.get(TOKEN_KEY).filter(|t| !t.is_empty()))
    }

    /// Drop the token from both scopes along with the remember preference.
    pub fn remove(&self) {
        self.tab.remove(TOKEN_KEY);
        self.persistent.remove(TOKEN_KEY);
        self.persistent.remove(REMEMBER_KEY);
    }

    pub fn has_remember_preference(&self) -> bool {
        self.persistent.get(REMEMBER_KEY).is_some_and(|v| v == "true")
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("has_token", &self.get().is_some())
            .field("remember_me", &self.has_remember_preference())
            .finish()
    }
}
