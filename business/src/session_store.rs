//! Persisted session state.
//!
//! The session lives in a durable key-value [`Storage`] under two keys: the opaque bearer
//! token and a status flag that is either `"loggedIn"` or anything else. [`SessionStore`] is
//! the only way the rest of the crate reads or changes those keys; it is handed explicitly to
//! the client and the controller instead of being read ambiently.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use log::{info, warn};

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the session status flag.
pub const STATUS_KEY: &str = "status";
/// The only status value that counts as logged in.
pub const LOGGED_IN: &str = "loggedIn";

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access session storage at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session storage is corrupt: {0}")]
    Corrupt(String),
    #[error("session storage lock was poisoned")]
    Poisoned,
}

/// Durable key-value storage surviving restarts of the front end.
pub trait Storage: Send + Sync + std::fmt::Debug {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage, lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_poisoned| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_poisoned| StorageError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_poisoned| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// Whether the user is signed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// Snapshot of the persisted session.
///
/// `status` is `LoggedIn` exactly when a token is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    status: SessionStatus,
}

impl Session {
    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn logged_in(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            status: SessionStatus::LoggedIn,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_logged_in(&self) -> bool {
        self.status == SessionStatus::LoggedIn
    }
}

/// Errors raised while changing the session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("refusing to store an empty session token")]
    EmptyToken,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Reads and writes the session through a [`Storage`] backend.
#[derive(Debug, Clone)]
pub struct SessionStore {
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// A store backed by [`MemoryStorage`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Current session.
    ///
    /// A status flag without a token, a token without the flag, or a storage read failure all
    /// read as logged out: none of them can authenticate a request.
    pub fn get(&self) -> Session {
        let status = match self.storage.get(STATUS_KEY) {
            Ok(status) => status,
            Err(e) => {
                warn!("SessionStore: failed to read session status: {e}");
                return Session::logged_out();
            }
        };

        if status.as_deref() != Some(LOGGED_IN) {
            return Session::logged_out();
        }

        match self.storage.get(TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => Session::logged_in(token),
            Ok(_) => Session::logged_out(),
            Err(e) => {
                warn!("SessionStore: failed to read session token: {e}");
                Session::logged_out()
            }
        }
    }

    /// Record a token returned by a successful authentication.
    pub fn set_logged_in(&self, token: &str) -> Result<(), SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(STATUS_KEY, LOGGED_IN)?;
        info!("SessionStore: session stored");
        Ok(())
    }

    /// Forget the session. Safe to call when already logged out.
    pub fn set_logged_out(&self) -> Result<(), SessionError> {
        // Status goes first so a failure half-way still reads as logged out.
        self.storage.remove(STATUS_KEY)?;
        self.storage.remove(TOKEN_KEY)?;
        info!("SessionStore: session cleared");
        Ok(())
    }
}
