use wasm_bindgen::JsValue;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage access failed: {0}")]
    Access(String),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        Self::Access(format!("{value:?}"))
    }
}

/// String key/value storage, as offered by the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// The browser's `window.localStorage`.
///
/// Unlike `gloo_storage::LocalStorage`, a missing or denied storage object is
/// reported as an error instead of panicking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        gloo_utils::window()
            .local_storage()?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(Self::storage()?.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(Self::storage()?.set_item(key, value)?)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Ok(Self::storage()?.remove_item(key)?)
    }
}

#[cfg(test)]
pub mod testutil {
    use super::{KeyValueStore, StorageError};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    /// In-memory store. Can be switched to fail every access.
    #[derive(Default)]
    pub struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        failing: Cell<bool>,
        reads: Cell<usize>,
    }

    impl MemoryStore {
        pub fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }

        pub fn failing() -> Self {
            let store = Self::default();
            store.failing.set(true);
            store
        }

        pub fn value(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        pub fn reads(&self) -> usize {
            self.reads.get()
        }

        fn check(&self) -> Result<(), StorageError> {
            if self.failing.get() {
                Err(StorageError::Access("SecurityError: access denied".into()))
            } else {
                Ok(())
            }
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.reads.set(self.reads.get() + 1);
            self.check()?;
            Ok(self.value(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.check()?;
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.check()?;
            self.values.borrow_mut().remove(key);
            Ok(())
        }
    }
}
