//! Store directory structure
//!
//! A store is a portable directory holding one document per record kind:
//!
//! ```text
//! store/
//! ├── products.json    # Full product catalog, ascending by id
//! └── orders.json      # All orders, in insertion order
//! ```
//!
//! Documents are rewritten wholesale after every mutation; either may be
//! absent before the first mutation of its kind.

use std::path::{Path, PathBuf};

/// Paths within a store directory
#[derive(Debug, Clone)]
pub struct StorePaths {
    root: PathBuf,
}

impl StorePaths {
    /// Create paths from the root directory
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        StorePaths {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root store directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the product document path
    pub fn products(&self) -> PathBuf {
        self.root.join("products.json")
    }

    /// Get the order document path
    pub fn orders(&self) -> PathBuf {
        self.root.join("orders.json")
    }

    /// Whether any document exists at this path
    ///
    /// A fresh directory (or a missing one) is a valid empty store.
    pub fn exists(&self) -> bool {
        self.products().exists() || self.orders().exists()
    }

    /// Create the store directory
    pub fn create_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)
    }
}
