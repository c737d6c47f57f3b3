//! Engine for shelfdb
//!
//! Binds the in-memory stores to the persistence layer: [`Database`] owns
//! one product tree and one order list, rebuilds both from their documents
//! at open, and rewrites the affected document after every mutation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod database;

pub use database::Database;
