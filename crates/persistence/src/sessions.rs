//! User session model and store abstraction

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lingo_bot_core::{Language, UserId};
use serde::{Deserialize, Serialize};

use crate::PersistenceError;

/// How the session language was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageOrigin {
    /// Derived from the client language code or the configured default
    Inferred,
    /// Picked explicitly through `/lang`
    Selected,
}

/// Per-user state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: UserId,
    pub language: Language,
    pub origin: LanguageOrigin,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserSession {
    /// Fresh session with an inferred language
    pub fn new(user_id: UserId, language: Language) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            language,
            origin: LanguageOrigin::Inferred,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an explicit selection
    ///
    /// Returns false when the session already held that selection, in which
    /// case nothing changes.
    pub fn select_language(&mut self, language: Language) -> bool {
        if self.origin == LanguageOrigin::Selected && self.language == language {
            return false;
        }
        self.language = language;
        self.origin = LanguageOrigin::Selected;
        self.updated_at = Utc::now();
        true
    }
}

/// Session store trait for abstraction
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Existing session, or a new one created with `inferred` as its language
    async fn get_or_create(
        &self,
        user_id: UserId,
        inferred: Language,
    ) -> Result<UserSession, PersistenceError>;

    async fn get(&self, user_id: UserId) -> Result<Option<UserSession>, PersistenceError>;

    /// Record an explicit language selection, creating the session if needed
    async fn set_language(
        &self,
        user_id: UserId,
        language: Language,
    ) -> Result<UserSession, PersistenceError>;

    /// Number of sessions held
    async fn count(&self) -> Result<usize, PersistenceError>;
}
