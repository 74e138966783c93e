use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Key holding the opaque session token.
pub const TOKEN_KEY: &str = "token";
/// Key holding the serialized [`Identity`](crate::domain::Identity).
pub const USER_KEY: &str = "user";
/// Transient keys used by the storage round-trip check.
pub const TEST_TOKEN_KEY: &str = "test_token";
pub const TEST_USER_KEY: &str = "test_user";

/// String-keyed persisted storage, shaped after the browser's `localStorage`.
///
/// Writes and removals cannot fail from the caller's point of view.
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str);

    fn remove_item(&self, key: &str);
}

/// In-process storage. Each instance is its own namespace.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    fn items(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items().remove(key);
    }
}

/// How [`TamperedStorage`] misbehaves on its key.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) enum Tamper {
    DropWrites,
    CorruptWrites,
    ForgetOnRead,
}

/// Storage that misbehaves on a single key and is well-behaved on all others.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct TamperedStorage {
    inner: MemoryStorage,
    key: &'static str,
    tamper: Tamper,
}

#[cfg(test)]
impl TamperedStorage {
    pub(crate) fn new(key: &'static str, tamper: Tamper) -> Self {
        Self {
            inner: MemoryStorage::new(),
            key,
            tamper,
        }
    }
}

#[cfg(test)]
impl Storage for TamperedStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let value = self.inner.get_item(key);
        if key == self.key && matches!(self.tamper, Tamper::ForgetOnRead) {
            self.inner.remove_item(key);
        }
        value
    }

    fn set_item(&self, key: &str, value: &str) {
        if key != self.key {
            return self.inner.set_item(key, value);
        }
        match self.tamper {
            Tamper::DropWrites => {}
            Tamper::CorruptWrites => self.inner.set_item(key, "{not json"),
            Tamper::ForgetOnRead => self.inner.set_item(key, value),
        }
    }

    fn remove_item(&self, key: &str) {
        self.inner.remove_item(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some_eq};

    #[test]
    fn set_item_overwrites_previous_value() {
        let storage = MemoryStorage::new();
        storage.set_item(TOKEN_KEY, "first");
        storage.set_item(TOKEN_KEY, "second");

        assert_some_eq!(storage.get_item(TOKEN_KEY), "second".to_string());
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn removing_a_missing_key_is_a_no_op() {
        let storage = MemoryStorage::new();
        storage.remove_item(USER_KEY);

        assert_none!(storage.get_item(USER_KEY));
        assert!(storage.is_empty());
    }

    #[test]
    fn instances_do_not_share_keys() {
        let a = MemoryStorage::new();
        let b = MemoryStorage::new();
        a.set_item(TOKEN_KEY, "abc");

        assert_none!(b.get_item(TOKEN_KEY));
    }

    #[test]
    fn tampered_storage_only_touches_its_own_key() {
        let storage = TamperedStorage::new(TOKEN_KEY, Tamper::ForgetOnRead);
        storage.set_item(TOKEN_KEY, "abc");
        storage.set_item(USER_KEY, "{}");

        assert_some_eq!(storage.get_item(TOKEN_KEY), "abc".to_string());
        assert_none!(storage.get_item(TOKEN_KEY));
        assert_some_eq!(storage.get_item(USER_KEY), "{}".to_string());
        assert_some_eq!(storage.get_item(USER_KEY), "{}".to_string());
    }
}
