//! Core record types for shelfdb
//!
//! This module defines the foundational types:
//! - ProductId / OrderId: integer identifier newtypes
//! - Product: a catalog entry, keyed by ProductId
//! - LineItem: one (product, quantity) pair inside an order
//! - Order: a customer order with its line items

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a product record
///
/// A ProductId wraps the caller-assigned positive integer that keys the
/// product catalog. Identifier validation (positivity, uniqueness policy on
/// create) happens in the embedding layer; the store treats the value as an
/// opaque ordered key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wrap a raw identifier
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identifier value
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Unique identifier for an order record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Wrap a raw identifier
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identifier value
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A product catalog entry
///
/// The identifier is immutable once created: writing a product under an
/// existing id replaces the record, it never creates a second one.
/// Field names match the on-disk document format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Unit price (non-negative; validated by the caller)
    pub price: f64,
    /// Optional free-form description (serialized as null when absent)
    pub description: Option<String>,
}

impl Product {
    /// Create a product without a description
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One line of an order: a product reference and a quantity
///
/// The product id is stored verbatim. It is NOT resolved against the
/// catalog at storage time; an order may reference an id that no product
/// currently has, and resolution into a named, priced line is a read-side
/// concern of the embedding layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Referenced product identifier (not validated against the catalog)
    pub product_id: ProductId,
    /// Ordered quantity (positive; validated by the caller)
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier
    pub id: OrderId,
    /// Customer display name
    pub customer_name: String,
    /// Ordered sequence of line items
    pub items: Vec<LineItem>,
}

impl Order {
    /// Create an order
    pub fn new(id: OrderId, customer_name: impl Into<String>, items: Vec<LineItem>) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            items,
        }
    }
}
