// SPDX-License-Identifier: MIT

//! Session persistence across application restarts.
//!
//! The session is the client-held proof of authentication (opaque token)
//! plus the cached user identity. No expiry is tracked locally; an expired
//! token is detected only when the backend rejects a request with 401.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Fixed file name of the persisted session, relative to the configured
/// session directory.
pub const SESSION_FILE: &str = ".nutrilife_session.json";

/// Cached identity of the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Account ID; the auth service omits it from login responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// An authenticated session: token plus user identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token, attached to every outgoing request
    pub token: String,
    pub user: SessionUser,
}

/// Storage contract for the current session.
///
/// Injected into the HTTP clients and façades so tests can substitute an
/// in-memory store.
pub trait SessionStore: Send + Sync {
    /// Persist the session, replacing any previous one.
    fn save(&self, session: &Session) -> std::io::Result<()>;

    /// Current session, or `None` when signed out.
    fn read(&self) -> Option<Session>;

    /// Remove the session. Must not fail: a clear that cannot complete is
    /// logged and otherwise ignored.
    fn clear(&self);
}

/// Session store backed by a single JSON file, the desktop analogue of
/// browser local storage.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store writing to `SESSION_FILE` inside `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SESSION_FILE),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &Session) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }

    fn read(&self) -> Option<Session> {
        let contents = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(session) => Some(session),
            Err(e) => {
                // A corrupt session file is treated as signed out
                tracing::warn!(path = %self.path.display(), error = %e, "Discarding unreadable session file");
                None
            }
        }
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove session file");
            }
        }
    }
}

/// In-memory session store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> std::io::Result<()> {
        *self.inner.write().expect("session lock poisoned") = Some(session.clone());
        Ok(())
    }

    fn read(&self) -> Option<Session> {
        self.inner.read().expect("session lock poisoned").clone()
    }

    fn clear(&self) {
        *self.inner.write().expect("session lock poisoned") = None;
    }
}
