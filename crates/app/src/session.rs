//! Admin session and its persistence.
//!
//! A [`Session`] exists only between a successful login and logout. It is stored under two fixed
//! keys so a later command (or a later run of the binary) can pick it up again.

use std::{fmt, fs, io, path::PathBuf};

use mockall::automock;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroize;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "berecons_admin_token";

/// Storage key holding the admin username.
pub const USER_KEY: &str = "berecons_admin_user";

/// An authenticated admin session.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "berecons_admin_token")]
    token: String,

    #[serde(rename = "berecons_admin_user")]
    username: String,
}

impl Session {
    /// Create a session from a login response.
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
        }
    }

    /// Bearer token attached to authenticated API calls.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Logged in admin username.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("username", &self.username)
            .finish()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.token.zeroize();
    }
}

/// Session persistence errors.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// Reading or writing the session file failed.
    #[error("session file error")]
    Io(#[from] io::Error),

    /// The session file did not contain a valid session.
    #[error("session file is malformed")]
    Malformed(#[from] serde_json::Error),
}

/// Persists the admin session between login and logout.
#[automock]
pub trait SessionStore: Send + Sync {
    /// Load the stored session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be read.
    fn load(&self) -> Result<Option<Session>, SessionStoreError>;

    /// Replace the stored session.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Remove the stored session. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be removed.
    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// Session store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store the session at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        let session: Session = serde_json::from_str(&contents)?;

        if session.token.is_empty() {
            return Ok(None);
        }

        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let contents = serde_json::to_string_pretty(session)?;

        fs::write(&self.path, contents)?;

        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.session.lock().clone())
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        *self.session.lock() = Some(session.clone());

        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        *self.session.lock() = None;

        Ok(())
    }
}
