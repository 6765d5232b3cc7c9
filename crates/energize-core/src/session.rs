//! # Session Storage
//!
//! The stored bearer token is the single source of truth for
//! "is the user authenticated". No expiry or validation happens here.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// Read/write/clear access to the persisted credential.
///
/// Implementations never fail: a store that cannot be read behaves as if
/// no token were present.
pub trait SessionStore: Send + Sync {
    /// Returns the stored token, if any.
    fn get(&self) -> Option<String>;

    /// Stores `token`, replacing any previous value.
    fn set(&self, token: String);

    /// Removes the stored token. Idempotent.
    fn clear(&self);

    /// Returns true if a token is present.
    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

/// Session store held in memory only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn set(&self, token: String) {
        *self.token.write() = Some(token);
    }

    fn clear(&self) {
        *self.token.write() = None;
    }
}

/// On-disk layout of the session file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    token: Option<String>,
}

/// Session store persisted as a small JSON file.
///
/// The file survives restarts of the application but is local to the
/// current user profile.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store in the platform config directory
    /// (`<config_dir>/energize/session.json`).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NoConfigDir`] if the platform has no config
    /// directory.
    pub fn in_config_dir() -> Result<Self> {
        let dir = dirs::config_dir().ok_or(CoreError::NoConfigDir)?;
        Ok(Self::new(dir.join("energize").join("session.json")))
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<SessionFile> {
        if !self.path.exists() {
            return Ok(SessionFile::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write(&self, file: &SessionFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(file)?)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<String> {
        match self.read() {
            Ok(file) => file.token,
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Failed to read session file");
                None
            }
        }
    }

    fn set(&self, token: String) {
        if let Err(e) = self.write(&SessionFile { token: Some(token) }) {
            tracing::warn!(path = ?self.path, error = %e, "Failed to persist session");
        }
    }

    fn clear(&self) {
        if !self.path.exists() {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!(path = ?self.path, error = %e, "Failed to remove session file");
        }
    }
}
