use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::session::{Session, SessionStorage, TOKEN_KEY, USER_ID_KEY};

/// In-memory SessionStorage for testing and native runs.
///
/// Keeps the same key/value layout as the browser's `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value under a storage key.
    pub fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Option<Session> {
        let token = self.get_item(TOKEN_KEY)?;
        let user_id = self.get_item(USER_ID_KEY)?.parse().ok()?;
        Some(Session { token, user_id })
    }

    fn save(&self, session: &Session) {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(TOKEN_KEY.to_string(), session.token.clone());
        items.insert(USER_ID_KEY.to_string(), session.user_id.to_string());
    }

    fn clear(&self) {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.remove(TOKEN_KEY);
        items.remove(USER_ID_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_layout() {
        let storage = MemorySessionStorage::new();
        assert!(storage.load().is_none());

        storage.save(&Session {
            token: "t0k3n".to_string(),
            user_id: 7,
        });
        assert_eq!(storage.get_item("jwtToken").as_deref(), Some("t0k3n"));
        assert_eq!(storage.get_item("userId").as_deref(), Some("7"));

        storage.clear();
        assert!(storage.get_item("jwtToken").is_none());
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_unparseable_user_id_means_no_session() {
        let storage = MemorySessionStorage::new();
        storage.save(&Session {
            token: "t".to_string(),
            user_id: 1,
        });
        storage
            .items
            .lock()
            .unwrap()
            .insert(USER_ID_KEY.to_string(), "not-a-number".to_string());
        assert!(storage.load().is_none());
    }
}
