//! # Snippets - a command-line key-value store for text
//!
//! Snippets provides:
//! - A SQLite-backed store owning one long-lived connection
//! - Insert-if-absent writes (first write for a keyword wins)
//! - Exact lookup by keyword, a catalog of all keywords, and substring search
//! - Human and JSON renderings of every result

use std::path::{Path, PathBuf};

pub mod snippet;
pub mod storage;
pub mod output;
pub mod config;
pub mod ui;


// Re-exports for convenient access
pub use snippet::{PutOutcome, PutReceipt, Snippet};
pub use storage::SqliteStore;

/// Result type alias for Snippets operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Snippets operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The database could not be opened or prepared for use
    #[error("open failed for {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A store operation failed for a reason other than a keyword conflict
    #[error("{operation} failed: {source}")]
    Operation {
        operation: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

impl Error {
    pub(crate) fn operation(operation: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| Self::Operation { operation, source }
    }

    pub(crate) fn open(path: &Path) -> impl FnOnce(rusqlite::Error) -> Self {
        let path = path.to_path_buf();
        move |source| Self::Open { path, source }
    }
}
