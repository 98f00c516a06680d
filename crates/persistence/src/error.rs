//! Persistence error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("Session backend error: {0}")]
    Backend(String),
}
