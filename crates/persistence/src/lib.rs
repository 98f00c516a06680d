//! Session storage for lingo-bot
//!
//! Provides the per-user state the dispatcher reads on every event:
//! - Sessions keyed by chat platform user id (UI language and its origin)
//! - An in-memory store living for the process lifetime
//!
//! Handlers only see the [`SessionStore`] trait, so a durable backend can be
//! swapped in without touching them.

pub mod error;
pub mod memory;
pub mod sessions;

pub use error::PersistenceError;
pub use memory::InMemorySessionStore;
pub use sessions::{LanguageOrigin, SessionStore, UserSession};
