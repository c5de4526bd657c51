//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - snippets(keyword PRIMARY KEY, message)

pub mod schema;
pub mod sqlite;

pub use sqlite::{SqliteStore, NOT_FOUND};
