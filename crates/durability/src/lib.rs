//! Persistence primitives for shelfdb
//!
//! Keeps each store's on-disk document consistent with its in-memory
//! contents: [`write_document`] replaces a document wholesale (atomic temp
//! file + rename), [`read_document`] loads it back at startup, and
//! [`StorePaths`] names the two documents inside a store directory.
//!
//! Only the logical record sequence is persisted, not the tree's shape or the
//! list's internal linkage. A reload rebuilds structure from scratch
//! by replaying the sequence.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod paths;

pub use document::{read_document, write_document, DocumentError};
pub use paths::StorePaths;
