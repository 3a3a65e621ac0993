use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Item name must not be empty")]
    EmptyName,

    #[error("Rating must be between 0 and {max}, got {0}", max = crate::Rating::MAX)]
    InvalidRating(u64),
}

pub type Result<T> = std::result::Result<T, CoreError>;
