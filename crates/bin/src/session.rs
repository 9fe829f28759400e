//! Session management for web interface
//!
//! Provides in-memory session storage mapping session tokens to open
//! [`SessionHandle`]s.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, RwLock};
use tracker::SessionHandle;
use uuid::Uuid;

/// Session token (UUID stored in cookie)
pub type SessionToken = String;

/// A handle shared between requests of the same session.
///
/// The mutex serializes record operations of one session. Library calls
/// block, so holders lock it with `blocking_lock` inside `spawn_blocking`.
pub type SharedHandle = Arc<Mutex<SessionHandle>>;

/// In-memory session store
///
/// Maps session tokens (UUIDs) to logged-in handles. Sessions are ephemeral,
/// never expire and are lost on server restart.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, SharedHandle>>>,
}

impl SessionStore {
    /// Create a new empty session store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a new session for a logged-in handle
    ///
    /// # Returns
    /// The session token (UUID) to be stored in a cookie
    pub async fn create_session(&self, handle: SessionHandle) -> SessionToken {
        let token = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), Arc::new(Mutex::new(handle)));
        token
    }

    /// Get the handle of a session token
    pub async fn get_handle(&self, token: &str) -> Option<SharedHandle> {
        let sessions = self.sessions.read().await;
        sessions.get(token).cloned()
    }

    /// Destroy a session
    ///
    /// # Returns
    /// The removed handle, if the token was known
    pub async fn destroy_session(&self, token: &str) -> Option<SharedHandle> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token)
    }

    /// Get the number of active sessions
    pub async fn session_count(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
