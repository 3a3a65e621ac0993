//! In-memory session store for cashia
//!
//! This crate provides:
//! - A single owned store for budget, transport cost and catalog
//! - Validation of raw user input before it reaches the store
//! - Snapshots handed to the planner

pub mod error;
pub mod input;
pub mod store;

pub use error::{Result, SessionError};
pub use store::{CatalogEntry, Session, SessionSnapshot};
