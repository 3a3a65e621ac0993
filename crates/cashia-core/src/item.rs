//! Catalog item domain model

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CoreError, Result};

/// Satisfaction rating on a 0..=10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 10;

    pub fn new(value: u64) -> Result<Self> {
        if value > u64::from(Self::MAX) {
            return Err(CoreError::InvalidRating(value));
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u64> for Rating {
    type Error = CoreError;

    fn try_from(value: u64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate food item. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub rating: Rating,
    pub price: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, rating: Rating, price: u64) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(Self {
            name,
            rating,
            price,
        })
    }
}
