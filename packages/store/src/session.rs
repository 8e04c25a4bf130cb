//! # Session context
//!
//! The active login is a bearer token plus the user's id. It lives in a
//! [`SessionHandle`] that is built once at the application boundary and handed
//! to everything that needs it: the HTTP store reads the token from it on every
//! mutating call, views read it to decide whether to show favorite toggles.
//!
//! Nothing caches the token. Logging out clears the handle, so the next call
//! made through it sees no session; calls already in flight keep the token they
//! were sent with.
//!
//! Persistence is delegated to a [`SessionStorage`] backend so the handle can
//! be restored after a page reload. The browser backend
//! ([`crate::LocalStorage`]) keeps the two values under [`TOKEN_KEY`] and
//! [`USER_ID_KEY`]; [`crate::MemorySessionStorage`] is used natively and in
//! tests.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::models::UserId;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "jwtToken";
/// Storage key for the logged-in user's id.
pub const USER_ID_KEY: &str = "userId";

/// An authenticated login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user_id: UserId,
}

/// Where a session survives page reloads.
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Shared, cloneable handle to the current session.
#[derive(Clone)]
pub struct SessionHandle {
    current: Arc<Mutex<Option<Session>>>,
    storage: Arc<dyn SessionStorage>,
}

impl SessionHandle {
    /// Create a handle, restoring any session the storage already holds.
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        let restored = storage.load();
        if let Some(ref session) = restored {
            tracing::debug!("Restored session for user {}", session.user_id);
        }
        Self {
            current: Arc::new(Mutex::new(restored)),
            storage: Arc::new(storage),
        }
    }

    /// A handle backed by process memory only.
    pub fn in_memory() -> Self {
        Self::new(crate::MemorySessionStorage::new())
    }

    pub fn current(&self) -> Option<Session> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The bearer token as of now.
    pub fn token(&self) -> Option<String> {
        self.current().map(|s| s.token)
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.current().map(|s| s.user_id)
    }

    pub fn is_logged_in(&self) -> bool {
        self.current().is_some()
    }

    /// Install a session and persist it.
    pub fn login(&self, session: Session) {
        self.storage.save(&session);
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    /// Drop the session. Later calls through this handle see no token.
    pub fn logout(&self) {
        self.storage.clear();
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the token
        f.debug_struct("SessionHandle")
            .field("user_id", &self.user_id())
            .finish()
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.current, &other.current)
    }
}
