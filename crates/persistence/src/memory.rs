//! In-memory session store

use async_trait::async_trait;
use lingo_bot_core::{Language, UserId};
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::{PersistenceError, SessionStore, UserSession};

/// Sessions held for the process lifetime
///
/// Every write happens under one lock acquisition; concurrent selections
/// for the same user resolve last-write-wins.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<UserId, UserSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_or_create(
        &self,
        user_id: UserId,
        inferred: Language,
    ) -> Result<UserSession, PersistenceError> {
        if let Some(session) = self.sessions.read().get(&user_id) {
            return Ok(session.clone());
        }

        let mut sessions = self.sessions.write();
        let session = sessions.entry(user_id).or_insert_with(|| {
            tracing::info!(user_id = %user_id, language = %inferred, "Created session");
            UserSession::new(user_id, inferred)
        });
        Ok(session.clone())
    }

    async fn get(&self, user_id: UserId) -> Result<Option<UserSession>, PersistenceError> {
        Ok(self.sessions.read().get(&user_id).cloned())
    }

    async fn set_language(
        &self,
        user_id: UserId,
        language: Language,
    ) -> Result<UserSession, PersistenceError> {
        let mut sessions = self.sessions.write();
        let session = sessions
            .entry(user_id)
            .or_insert_with(|| UserSession::new(user_id, language));

        if session.select_language(language) {
            tracing::info!(user_id = %user_id, language = %language, "Language selected");
        }
        Ok(session.clone())
    }

    async fn count(&self) -> Result<usize, PersistenceError> {
        Ok(self.sessions.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LanguageOrigin;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_or_create_keeps_first_language() {
        let store = InMemorySessionStore::new();
        let first = store.get_or_create(UserId(1), Language::Spanish).await.unwrap();
        assert_eq!(first.language, Language::Spanish);

        let second = store.get_or_create(UserId(1), Language::English).await.unwrap();
        assert_eq!(second.language, Language::Spanish);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_set_language() {
        let store = InMemorySessionStore::new();
        store.get_or_create(UserId(1), Language::English).await.unwrap();

        let session = store.set_language(UserId(1), Language::Spanish).await.unwrap();
        assert_eq!(session.language, Language::Spanish);
        assert_eq!(session.origin, LanguageOrigin::Selected);

        let stored = store.get(UserId(1)).await.unwrap().unwrap();
        assert_eq!(stored, session);
    }

    #[tokio::test]
    async fn test_set_language_twice_is_stable() {
        let store = InMemorySessionStore::new();
        let first = store.set_language(UserId(5), Language::English).await.unwrap();
        let second = store.set_language(UserId(5), Language::English).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_set_language_creates_missing_session() {
        let store = InMemorySessionStore::new();
        let session = store.set_language(UserId(9), Language::Spanish).await.unwrap();
        assert_eq!(session.origin, LanguageOrigin::Selected);
        assert!(store.get(UserId(9)).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let store = InMemorySessionStore::new();
        store.set_language(UserId(1), Language::Spanish).await.unwrap();
        let other = store.get_or_create(UserId(2), Language::English).await.unwrap();
        assert_eq!(other.language, Language::English);
        assert!(store.get(UserId(3)).await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut handles = Vec::new();
        for i in 0..64u64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let language = if i % 2 == 0 { Language::English } else { Language::Spanish };
                store.set_language(UserId(i % 8), language).await.unwrap();
                store.get_or_create(UserId(i % 8), Language::English).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.count().await.unwrap(), 8);
        for i in 0..8u64 {
            let session = store.get(UserId(i)).await.unwrap().unwrap();
            assert_eq!(session.origin, LanguageOrigin::Selected);
        }
    }
}
