//! # Shopping Cart
//!
//! An ordered aggregator over [`Product`] records. The cart starts empty,
//! grows only through [`ShoppingCart::add_item`], and derives a single
//! summary value via [`ShoppingCart::get_total`]. There is no removal
//! operation.

use tracing::debug;

use crate::model::Product;

/// Ordered collection of products with a sum-based total.
///
/// Duplicates are allowed: adding a product with quantity `n` appends `n`
/// copies, each counted individually by the total. Insertion order is
/// preserved (it does not affect the sum, but callers may rely on it).
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    items: Vec<Product>,
}

impl ShoppingCart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `quantity` copies of the product.
    ///
    /// A quantity of zero appends nothing; this is not an error.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        debug!(product_id = %product.id, quantity, "Adding to cart");
        for _ in 0..quantity {
            self.items.push(product.clone());
        }
    }

    /// Returns the sum of all contained prices, `0.0` when empty.
    pub fn get_total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// The contained products in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
