//! Authentication status, backed by a flag in local storage.
//!
//! The flag is written by the sign-in flow and removed by the sign-out flow
//! ([`Session`]). The navigation guard only ever reads it, through an injected
//! [`AuthStatus`].

mod store;

pub use store::*;

use crate::config::{AUTH_FLAG_VALUE, AUTH_STORAGE_KEY};
use std::rc::Rc;

/// Outcome of reading the authentication flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    SignedIn,
    SignedOut,
    /// The flag could not be read.
    Unknown,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::SignedIn)
    }
}

pub trait AuthStatus {
    fn status(&self) -> AuthState;
}

impl AuthStatus for AuthState {
    fn status(&self) -> AuthState {
        *self
    }
}

impl<A: AuthStatus + ?Sized> AuthStatus for Rc<A> {
    fn status(&self) -> AuthState {
        (**self).status()
    }
}

impl<A: AuthStatus + ?Sized> AuthStatus for &A {
    fn status(&self) -> AuthState {
        (**self).status()
    }
}

/// Reads the authentication flag from a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct StoredAuth<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StoredAuth<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

impl StoredAuth<BrowserStorage> {
    pub fn local() -> Self {
        Self::new(BrowserStorage, AUTH_STORAGE_KEY)
    }
}

impl<S: KeyValueStore> AuthStatus for StoredAuth<S> {
    fn status(&self) -> AuthState {
        match self.store.get(&self.key) {
            Ok(Some(value)) if value == AUTH_FLAG_VALUE => AuthState::SignedIn,
            Ok(_) => AuthState::SignedOut,
            Err(err) => {
                log::debug!("Unable to read authentication flag '{}': {err}", self.key);
                AuthState::Unknown
            }
        }
    }
}

/// Sets and clears the authentication flag.
#[derive(Clone, Debug)]
pub struct Session<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn sign_in(&self) -> Result<(), StorageError> {
        self.store.set(&self.key, AUTH_FLAG_VALUE)
    }

    pub fn sign_out(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key)
    }
}

impl Session<BrowserStorage> {
    pub fn local() -> Self {
        Self::new(BrowserStorage, AUTH_STORAGE_KEY)
    }
}

#[cfg(test)]
mod test {
    use super::testutil::MemoryStore;
    use super::*;

    const KEY: &str = "test:auth";

    #[test]
    fn only_exact_true_is_signed_in() {
        for (value, expected) in [
            ("true", AuthState::SignedIn),
            ("false", AuthState::SignedOut),
            ("TRUE", AuthState::SignedOut),
            (" true", AuthState::SignedOut),
            ("1", AuthState::SignedOut),
            ("\"true\"", AuthState::SignedOut),
            ("", AuthState::SignedOut),
        ] {
            let store = MemoryStore::with(KEY, value);
            assert_eq!(StoredAuth::new(&store, KEY).status(), expected, "{value:?}");
        }
    }

    #[test]
    fn missing_flag_is_signed_out() {
        let store = MemoryStore::default();
        assert_eq!(StoredAuth::new(&store, KEY).status(), AuthState::SignedOut);
    }

    #[test]
    fn other_key_is_ignored() {
        let store = MemoryStore::with("other:auth", "true");
        assert_eq!(StoredAuth::new(&store, KEY).status(), AuthState::SignedOut);
    }

    #[test]
    fn read_failure_is_unknown() {
        let store = MemoryStore::failing();
        let status = StoredAuth::new(&store, KEY).status();
        assert_eq!(status, AuthState::Unknown);
        assert!(!status.is_authenticated());
    }

    #[test]
    fn status_does_not_write() {
        let store = MemoryStore::with(KEY, "true");
        let auth = StoredAuth::new(&store, KEY);
        assert_eq!(auth.status(), auth.status());
        assert_eq!(store.value(KEY).as_deref(), Some("true"));
    }

    #[test]
    fn session_round_trip() {
        let store = MemoryStore::default();
        let session = Session::new(&store, KEY);
        let auth = StoredAuth::new(&store, KEY);

        session.sign_in().unwrap();
        assert_eq!(store.value(KEY).as_deref(), Some("true"));
        assert_eq!(auth.status(), AuthState::SignedIn);

        session.sign_out().unwrap();
        assert_eq!(store.value(KEY), None);
        assert_eq!(auth.status(), AuthState::SignedOut);
    }

    #[test]
    fn session_reports_storage_errors() {
        let store = MemoryStore::failing();
        let session = Session::new(&store, KEY);
        assert!(matches!(session.sign_in(), Err(StorageError::Access(_))));
        assert!(matches!(session.sign_out(), Err(StorageError::Access(_))));
    }

    #[test]
    fn shared_provider() {
        let auth: Rc<dyn AuthStatus> = Rc::new(AuthState::SignedIn);
        assert!(auth.status().is_authenticated());
    }
}
