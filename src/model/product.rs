/// Represents a product in the catalog.
///
/// # Recipe
/// This is a plain data holder: public fields, a small constructor, and one
/// derived computation ([`Product::apply_discount`]). It carries no behavior
/// beyond what can be computed from its own fields.
///
/// Construction normalizes the optional pieces:
/// - `tags` is always a concrete `Vec` — [`Product::new`] starts it empty and
///   [`Product::with_tags`] fills it in.
/// - `in_stock` defaults to `true`; [`Product::with_stock`] overrides it.
use serde::{Deserialize, Serialize};

use std::collections::HashMap;
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price. Expected to be non-negative; not validated.
    pub price: f64,
    /// Catalog tags. Never absent — an untagged product holds an empty vec.
    pub tags: Vec<String>,
    pub in_stock: bool,
}

impl Product {
    /// Creates a new Product with no tags, in stock.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `name` - Product name
    /// * `price` - Unit price
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            tags: Vec::new(),
            in_stock: true,
        }
    }

    /// Replaces the tag list.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Overrides the availability flag.
    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Returns the price after applying a discount percentage.
    ///
    /// `percentage` is expected in `[0, 100]` and is not validated:
    /// values outside that range silently produce negative or increased
    /// prices. The product itself is left unchanged.
    pub fn apply_discount(&self, percentage: f64) -> f64 {
        self.price * (1.0 - percentage / 100.0)
    }
}

/// Groups products by tag with a single linear scan.
///
/// Every product appears once under each of its tags; untagged products
/// appear in no bucket. Within a bucket, products keep their input order.
pub fn index_by_tag(products: &[Product]) -> HashMap<String, Vec<&Product>> {
    let mut index: HashMap<String, Vec<&Product>> = HashMap::new();
    for product in products {
        for tag in &product.tags {
            index.entry(tag.clone()).or_default().push(product);
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_defaults() {
        let product = Product::new(ProductId(1), "Mouse", 29.99);

        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.name, "Mouse");
        assert!(product.tags.is_empty());
        assert!(product.in_stock);
    }

    #[test]
    fn test_builders_override_defaults() {
        let product = Product::new(ProductId(2), "Headphones", 149.99)
            .with_tags(["electronics", "audio"])
            .with_stock(false);

        assert_eq!(product.tags, vec!["electronics", "audio"]);
        assert!(!product.in_stock);
    }

    #[test]
    fn test_apply_discount() {
        let product = Product::new(ProductId(1), "Mouse", 29.99);

        let discounted = product.apply_discount(10.0);

        assert!((discounted - 26.991).abs() < 1e-9);
        // The product itself is unchanged.
        assert_eq!(product.price, 29.99);
    }

    #[test]
    fn test_apply_discount_bounds() {
        let product = Product::new(ProductId(1), "Mouse", 100.0);

        assert_eq!(product.apply_discount(0.0), 100.0);
        assert_eq!(product.apply_discount(100.0), 0.0);
        // Out-of-range input is not validated.
        assert_eq!(product.apply_discount(200.0), -100.0);
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId(7).to_string(), "product_7");
    }

    #[test]
    fn test_index_by_tag_groups_and_preserves_order() {
        let products = vec![
            Product::new(ProductId(1), "Laptop", 999.99).with_tags(["electronics", "computers"]),
            Product::new(ProductId(2), "Headphones", 149.99).with_tags(["electronics", "audio"]),
            Product::new(ProductId(3), "Mouse", 29.99),
        ];

        let index = index_by_tag(&products);

        let electronics = &index["electronics"];
        assert_eq!(electronics.len(), 2);
        assert_eq!(electronics[0].name, "Laptop");
        assert_eq!(electronics[1].name, "Headphones");
        assert_eq!(index["computers"].len(), 1);
        assert_eq!(index["audio"].len(), 1);
        // The untagged Mouse appears in no bucket.
        assert!(index.values().flatten().all(|p| p.id != ProductId(3)));
    }
}
