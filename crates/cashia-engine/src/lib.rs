//! Planning engine for cashia
//!
//! Checks the caller-side preconditions on a session snapshot, runs the
//! allocator once and wraps the result in a hashed [`Plan`].

pub mod error;
pub mod plan;

pub use error::{PlanError, Result};
pub use plan::{DEFAULT_MAX_CAPACITY, DEFAULT_MAX_TABLE_CELLS, Plan, Planner};
