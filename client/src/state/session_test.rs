use super::*;

fn scoped_store() -> (SessionStore, MemoryStore, MemoryStore) {
    let local = MemoryStore::default();
    let tab = MemoryStore::default();
    (SessionStore::new(local.clone(), tab.clone()), local, tab)
}

struct RejectingStore;

impl KeyValueStore for RejectingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteRejected("quota exceeded".to_owned()))
    }

    fn remove(&self, _key: &str) {}
}

// =============================================================
// set / get
// =============================================================

#[test]
fn get_returns_none_when_empty() {
    let store = SessionStore::in_memory();
    assert_eq!(store.get(), None);
    assert!(!store.has_remember_preference());
}

#[test]
fn remembered_login_uses_persistent_scope() {
    let (store, local, tab) = scoped_store();
    store.set("tok-1", true).unwrap();

    assert_eq!(store.get().as_deref(), Some("tok-1"));
    assert_eq!(local.get(TOKEN_KEY).as_deref(), Some("tok-1"));
    assert_eq!(local.get(REMEMBER_KEY).as_deref(), Some("true"));
    assert!(tab.is_empty());
    assert!(store.has_remember_preference());
}

#[test]
fn plain_login_uses_tab_scope() {
    let (store, local, tab) = scoped_store();
    store.set("tok-1", false).unwrap();

    assert_eq!(store.get().as_deref(), Some("tok-1"));
    assert_eq!(tab.get(TOKEN_KEY).as_deref(), Some("tok-1"));
    assert!(local.is_empty());
    assert!(!store.has_remember_preference());
}

#[test]
fn new_login_overwrites_previous_token_in_every_scope() {
    let (store, local, tab) = scoped_store();
    store.set("old", true).unwrap();
    store.set("new", false).unwrap();

    assert_eq!(store.get().as_deref(), Some("new"));
    assert_eq!(local.get(TOKEN_KEY), None);
    assert_eq!(tab.get(TOKEN_KEY).as_deref(), Some("new"));
}

#[test]
fn plain_login_clears_stale_remember_preference() {
    let (store, local, _tab) = scoped_store();
    store.set("first", true).unwrap();
    assert!(store.has_remember_preference());

    store.set("second", false).unwrap();
    assert!(!store.has_remember_preference());
    assert_eq!(local.get(REMEMBER_KEY), None);
}

#[test]
fn empty_token_counts_as_absent() {
    let (store, _local, tab) = scoped_store();
    tab.set(TOKEN_KEY, "").unwrap();
    assert_eq!(store.get(), None);
}

#[test]
fn clones_share_storage() {
    let store = SessionStore::in_memory();
    let other = store.clone();
    store.set("shared", false).unwrap();
    assert_eq!(other.get().as_deref(), Some("shared"));
}

#[test]
fn set_reports_rejected_write() {
    let store = SessionStore::new(RejectingStore, RejectingStore);
    assert_eq!(
        store.set("tok", true),
        Err(StorageError::WriteRejected("quota exceeded".to_owned()))
    );
    assert_eq!(store.get(), None);
}

#[test]
fn failed_write_keeps_previous_remembered_session() {
    let local = MemoryStore::default();
    let store = SessionStore::new(local.clone(), RejectingStore);
    store.set("remembered", true).unwrap();

    assert!(store.set("fresh", false).is_err());

    assert_eq!(store.get().as_deref(), Some("remembered"));
    assert_eq!(local.get(TOKEN_KEY).as_deref(), Some("remembered"));
    assert!(store.has_remember_preference());
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_clears_token_and_preference() {
    let (store, local, tab) = scoped_store();
    store.set("tok", true).unwrap();
    store.remove();

    assert_eq!(store.get(), None);
    assert!(!store.has_remember_preference());
    assert!(local.is_empty());
    assert!(tab.is_empty());
}

#[test]
fn remove_twice_matches_remove_once() {
    let (store, local, tab) = scoped_store();
    store.set("tok", true).unwrap();
    store.remove();
    store.remove();

    assert_eq!(store.get(), None);
    assert!(local.is_empty());
    assert!(tab.is_empty());
}

#[test]
fn debug_output_never_contains_token() {
    let store = SessionStore::in_memory();
    store.set("super-secret-token", true).unwrap();
    let rendered = format!("{store:?}");
    assert!(!rendered.contains("super-secret-token"));
    assert!(rendered.contains("has_token: true"));
}
