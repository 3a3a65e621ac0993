//! Error types for cashia-session

use cashia_core::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please fill in the {0} before submitting")]
    MissingField(&'static str),

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidInput {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
