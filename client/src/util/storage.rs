//! Browser Web Storage adapter for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the `web-sys` glue so the session store stays testable. Each
//! call re-acquires the storage handle, which keeps the adapter `Send + Sync`
//! for Leptos context. Outside the browser every read is empty and every
//! write reports [`StorageError::Unavailable`].

use crate::state::session::{KeyValueStore, StorageError};

/// Which Web Storage area to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowserStorage {
    /// `window.localStorage`, survives restarts.
    Local,
    /// `window.sessionStorage`, scoped to the tab.
    Session,
}

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn handle(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self {
            Self::Local => window.local_storage(),
            Self::Session => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            self.handle()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = self.handle().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::WriteRejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = self.handle() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
