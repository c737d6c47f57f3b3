//! Error types for shelfdb
//!
//! This module defines the error taxonomy shared across the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Absence is never an error here: lookups return `Option` and deletions
//! return `bool`. The variants below cover what can actually fail: the
//! document rewrite after a mutation, and parsing a document at startup.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for shelfdb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the record store
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading or writing a document
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A record set could not be serialized for its document
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A document exists on disk but could not be parsed
    ///
    /// Fatal at startup: the store refuses to open over a document it
    /// cannot read back.
    #[error("corrupt document {}: {reason}", .path.display())]
    CorruptDocument {
        /// Path of the unreadable document
        path: PathBuf,
        /// Parser error text
        reason: String,
    },
}
