//! Core domain models and logic for cashia
//!
//! This crate contains:
//! - Domain models (Item, Rating, Allocation)
//! - The allocator (0/1 knapsack over price and rating)
//! - Budget overview over a whole catalog

pub mod allocation;
pub mod error;
pub mod item;
pub mod overview;

pub use allocation::{Allocation, allocate, capacity, table_cells};
pub use error::{CoreError, Result};
pub use item::{Item, Rating};
pub use overview::{BudgetOverview, BudgetStatus};
