//! Core utilities for the prop card CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: File system locations and atomic file writes
//! - `http`: Request header construction for the feed fetchers
//! - `names`: Player name normalization shared by matching and slugs

pub mod cache;
pub mod http;
pub mod names;

// Re-export commonly used items for convenience
pub use cache::{data_dir, meta_path_for, write_string};
pub use names::{make_slug, normalize_name};
