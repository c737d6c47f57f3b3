//! shelfdb - Embedded record store for product catalogs and customer orders
//!
//! shelfdb keeps two record kinds in memory (products in a binary search
//! tree keyed by product id, orders in a singly linked list in insertion
//! order) and mirrors each structure to a JSON document on disk after
//! every mutation. Opening a store rebuilds both structures from those
//! documents.
//!
//! # Quick Start
//!
//! ```ignore
//! use shelfdb::{Database, Product, ProductId};
//!
//! // Open (or create) a store directory
//! let mut db = Database::open("/path/to/store")?;
//!
//! // Write a product; the document is rewritten before this returns
//! db.put_product(Product::new(ProductId::new(1), "Widget", 9.99))?;
//!
//! // Read it back
//! let widget = db.product(ProductId::new(1));
//! ```
//!
//! # Architecture
//!
//! The [`Database`] facade owns one [`ProductTree`] and one [`OrderList`]
//! and is the surface a request layer embeds. The structures are also
//! exported directly for callers that manage persistence themselves.
//! Mutating methods take `&mut self`; there is no internal locking, so a
//! concurrent embedder serializes calls itself.

pub use shelf_core::{Error, LineItem, Order, OrderId, Product, ProductId, Result};
pub use shelf_durability::StorePaths;
pub use shelf_engine::Database;
pub use shelf_storage::{OrderList, ProductTree};
