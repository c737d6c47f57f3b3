//! Database struct and open/load logic
//!
//! This module provides the main [`Database`] struct that orchestrates:
//! - The in-memory stores (product tree, order list)
//! - Startup reconstruction from the on-disk documents
//! - The rewrite-after-every-mutation persistence discipline
//!
//! A `Database` is an explicit value: construct one with [`Database::open`]
//! and hand it to whatever request layer embeds it. Mutating methods take
//! `&mut self`, so callers are serialized by the borrow rules; there is no
//! internal locking.
//!
//! ## Persistence contract
//!
//! Every mutating call updates the in-memory structure first and then
//! rewrites that store's document. If the rewrite fails, the error is
//! returned while the in-memory change remains: memory and disk disagree
//! until the next successful rewrite, and the caller is expected to treat
//! the operation as failed.

use shelf_core::{Order, OrderId, Product, ProductId, Result};
use shelf_durability::{read_document, write_document, StorePaths};
use shelf_storage::{OrderList, ProductTree};
use std::path::Path;
use tracing::{debug, info};

/// Record store over a product tree and an order list
///
/// # Example
///
/// ```ignore
/// use shelf_engine::Database;
/// use shelf_core::{Product, ProductId};
///
/// let mut db = Database::open("/path/to/store")?;
/// db.put_product(Product::new(ProductId::new(1), "Widget", 9.99))?;
/// let widget = db.product(ProductId::new(1));
/// ```
pub struct Database {
    paths: StorePaths,
    products: ProductTree,
    orders: OrderList,
}

impl Database {
    /// Open the store rooted at `path`, rebuilding both structures from disk
    ///
    /// Creates the directory if needed. For each document present on disk,
    /// the corresponding store is rebuilt from empty by replaying the
    /// document's records in order (inserts for the tree, appends for the
    /// list). A missing document leaves that store empty; a document that
    /// exists but cannot be parsed fails the open.
    ///
    /// The tree's shape is not persisted, only its record set: the rebuilt
    /// tree has the same keys and ordering invariant as before, not
    /// necessarily the same internal shape.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let paths = StorePaths::from_root(path);
        paths.create_directories()?;

        let mut products = ProductTree::new();
        if let Some(records) = read_document::<Product>(&paths.products())? {
            for product in records {
                products.insert(product.id, product);
            }
        }

        let mut orders = OrderList::new();
        if let Some(records) = read_document::<Order>(&paths.orders())? {
            for order in records {
                orders.append(order);
            }
        }

        info!(
            root = %paths.root().display(),
            products = products.len(),
            orders = orders.len(),
            "Store opened"
        );

        Ok(Database {
            paths,
            products,
            orders,
        })
    }

    /// Root directory of this store
    pub fn root(&self) -> &Path {
        self.paths.root()
    }

    // ========================================================================
    // Products
    // ========================================================================

    /// Insert or overwrite a product, then rewrite the product document
    ///
    /// Create and update are the same operation: the record is stored under
    /// its own id, and a second write to an id replaces the first (last
    /// write wins). Rejecting duplicate creates is the caller's policy:
    /// check [`Database::product`] first if creates must be unique.
    pub fn put_product(&mut self, product: Product) -> Result<()> {
        self.products.insert(product.id, product);
        self.save_products()
    }

    /// Look up a product by id
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// All products, ascending by id
    pub fn products(&self) -> Vec<&Product> {
        self.products.iter().collect()
    }

    /// Delete a product by id, then rewrite the product document
    ///
    /// Returns whether a removal occurred. When nothing matched, the
    /// document is left untouched.
    pub fn delete_product(&mut self, id: ProductId) -> Result<bool> {
        if !self.products.remove(id) {
            return Ok(false);
        }
        self.save_products()?;
        Ok(true)
    }

    /// Number of products
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// Append an order, then rewrite the order document
    ///
    /// Line items are stored verbatim; product ids they reference are not
    /// resolved against the catalog. Duplicate-id policy is the caller's:
    /// check [`Database::order`] first if creates must be unique.
    pub fn append_order(&mut self, order: Order) -> Result<()> {
        self.orders.append(order);
        self.save_orders()
    }

    /// Look up an order by id
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.find(id)
    }

    /// All orders, in insertion order
    pub fn orders(&self) -> Vec<&Order> {
        self.orders.iter().collect()
    }

    /// Replace an order's record and rewrite the order document in one call
    ///
    /// Returns false (and writes nothing) when no order has the given id.
    /// The replacement record is stored wholesale, including its own `id`
    /// field; keeping that id consistent with `id` is the caller's check.
    pub fn update_order(&mut self, id: OrderId, order: Order) -> Result<bool> {
        match self.orders.find_mut(id) {
            Some(slot) => *slot = order,
            None => return Ok(false),
        }
        self.save_orders()?;
        Ok(true)
    }

    /// Delete an order by id, then rewrite the order document
    ///
    /// Returns whether a removal occurred. When nothing matched, the
    /// document is left untouched.
    pub fn delete_order(&mut self, id: OrderId) -> Result<bool> {
        if !self.orders.remove(id) {
            return Ok(false);
        }
        self.save_orders()?;
        Ok(true)
    }

    /// Number of orders
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    // ========================================================================
    // Document rewrites
    // ========================================================================

    fn save_products(&self) -> Result<()> {
        let records: Vec<&Product> = self.products.iter().collect();
        write_document(&self.paths.products(), &records)?;
        debug!(products = records.len(), "Product document rewritten");
        Ok(())
    }

    fn save_orders(&self) -> Result<()> {
        let records: Vec<&Order> = self.orders.iter().collect();
        write_document(&self.paths.orders(), &records)?;
        debug!(orders = records.len(), "Order document rewritten");
        Ok(())
    }
}
