//! Storage layer for the prop card CLI
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Game-log snapshot replacement and loading
//! - `runs`: Card run history

pub mod models;
pub mod queries;
pub mod runs;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::PlayerDatabase;
