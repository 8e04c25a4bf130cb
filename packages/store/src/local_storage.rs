//! # Browser `localStorage` session backend
//!
//! [`LocalStorage`] is the [`SessionStorage`] used on the **web platform**. It
//! keeps the bearer token and user id under the `jwtToken` / `userId` keys so a
//! login survives page reloads until the user logs out or clears site data.
//!
//! The struct is zero-sized and looks up `window.localStorage` on every call.
//! Storage failures (private browsing, quota) are logged and otherwise ignored;
//! the worst outcome is that the user has to log in again after a reload.

use crate::session::{Session, SessionStorage, TOKEN_KEY, USER_ID_KEY};

/// `window.localStorage`-backed SessionStorage for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage for LocalStorage {
    fn load(&self) -> Option<Session> {
        let storage = Self::storage()?;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        let user_id = storage.get_item(USER_ID_KEY).ok()??.parse().ok()?;
        Some(Session { token, user_id })
    }

    fn save(&self, session: &Session) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, session will not persist");
            return;
        };
        if storage.set_item(TOKEN_KEY, &session.token).is_err()
            || storage
                .set_item(USER_ID_KEY, &session.user_id.to_string())
                .is_err()
        {
            tracing::warn!("Failed to persist session to localStorage");
        }
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, stored session not cleared");
            return;
        };
        for key in [TOKEN_KEY, USER_ID_KEY] {
            if storage.remove_item(key).is_err() {
                tracing::warn!("Failed to remove {} from localStorage", key);
            }
        }
    }
}
