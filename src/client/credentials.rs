//! Credential Store
//!
//! Persists the single opaque session token between runs. The token is
//! never inspected; the store only moves bytes.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::shared::error::CredentialStoreError;

pub type Result<T> = std::result::Result<T, CredentialStoreError>;

/// Storage for the session token.
pub trait CredentialStore: Send + Sync {
    /// Stored token, `None` when absent
    fn get_token(&self) -> Result<Option<String>>;
    fn set_token(&self, token: &str) -> Result<()>;
    /// Remove the token; removing an absent token is not an error
    fn remove_token(&self) -> Result<()>;
}

/// Token kept in a single file on disk
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> CredentialStoreError {
        CredentialStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn get_token(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn set_token(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        fs::write(&self.path, token).map_err(|e| self.io_error(e))
    }

    fn remove_token(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

/// Process-local store, used by tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

impl MemoryCredentialStore {
    /// The slot only ever holds a whole value, so a poisoned lock is still usable
    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get_token(&self) -> Result<Option<String>> {
        Ok(self.slot().clone())
    }

    fn set_token(&self, token: &str) -> Result<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn remove_token(&self) -> Result<()> {
        *self.slot() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("nested").join("token"));

        assert_eq!(store.get_token().unwrap(), None);
        store.set_token("abc.def.ghi").unwrap();
        assert_eq!(store.get_token().unwrap(), Some("abc.def.ghi".to_string()));

        store.remove_token().unwrap();
        assert_eq!(store.get_token().unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_overwrites_on_rotation() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("token"));
        store.set_token("first").unwrap();
        store.set_token("second").unwrap();
        assert_eq!(store.get_token().unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_blank_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "  \n").unwrap();
        assert_eq!(FileCredentialStore::new(path).get_token().unwrap(), None);
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("token"));
        assert!(store.remove_token().is_ok());
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryCredentialStore::new();
        let other = store.clone();
        store.set_token("t").unwrap();
        assert_eq!(other.get_token().unwrap(), Some("t".to_string()));
        other.remove_token().unwrap();
        assert_eq!(store.get_token().unwrap(), None);
    }

    #[test]
    fn test_memory_store_survives_poisoned_lock() {
        let store = MemoryCredentialStore::with_token("before");
        let shared = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.token.lock().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(store.token.is_poisoned());

        assert_eq!(store.get_token().unwrap().as_deref(), Some("before"));
        store.set_token("after").unwrap();
        assert_eq!(store.get_token().unwrap().as_deref(), Some("after"));
        store.remove_token().unwrap();
        assert!(store.get_token().unwrap().is_none());
    }
}
