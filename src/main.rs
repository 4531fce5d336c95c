//! # Cart Recipe Demo
//!
//! The demonstration driver. It composes every component in the crate once:
//!
//! 1. Iterator pipelines (squares, word lengths, sort-by-length closure).
//! 2. The scoped file handle, writing a fixed line with the error reported
//!    and execution continuing.
//! 3. One line of interactive input parsed as an integer, with an
//!    unconditional completion message.
//! 4. The [`Product`] record, the tag index, and a [`ShoppingCart`].
//! 5. The Fibonacci generator.
//!
//! The whole routine runs inside the [`timed`] wrapper, so the final log
//! line reports how long the demo took. This file is illustrative glue, not
//! reusable logic — the library modules are the recipe.

use std::collections::HashMap;
use std::io::{self, Write};

use tracing::{error, info, warn};

use cart_recipe::cart::ShoppingCart;
use cart_recipe::fs::{FileManager, FileMode};
use cart_recipe::model::{index_by_tag, Product, ProductId};
use cart_recipe::runtime::setup_tracing;
use cart_recipe::sequence::fibonacci;
use cart_recipe::timing::timed;

fn main() {
    // Setup tracing once for the entire application
    setup_tracing();

    let mut demo = timed("run_demo", run_demo);
    demo();
}

fn run_demo() {
    // Iterator pipelines where a scripting language would use comprehensions
    let squares: Vec<u32> = (0..10).filter(|x| x % 2 == 0).map(|x| x * x).collect();
    info!(?squares, "Squares of even numbers");

    let word_lengths: HashMap<&str, usize> = ["hello", "world", "rust"]
        .into_iter()
        .map(|word| (word, word.len()))
        .collect();
    info!(?word_lengths, "Word lengths");

    // A closure passed around like any other value
    let sort_by_length: fn(Vec<&str>) -> Vec<&str> = |mut items| {
        items.sort_by_key(|item| item.len());
        items
    };
    let words = vec!["rust", "programming", "is", "fun"];
    info!(sorted = ?sort_by_length(words), "Sorted by length");

    // Scoped file write: the guard closes the file however this block ends
    let mut manager = FileManager::new("example.txt", FileMode::Write);
    match manager.with(|file| file.write_all(b"Hello from Rust!")) {
        Ok(()) => info!(path = %manager.path().display(), "Wrote greeting"),
        Err(e) => error!(error = %e, "I/O error"),
    }

    // Interactive input with local recovery
    info!("Enter a number:");
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(_) => match line.trim().parse::<i64>() {
            Ok(value) => info!(value, "You entered"),
            Err(_) => warn!("That's not a valid number!"),
        },
        Err(e) => error!(error = %e, "Failed to read input"),
    }
    info!("Input processing complete");

    // A small catalog and its transient tag index
    let products = vec![
        Product::new(ProductId(1), "Laptop", 999.99).with_tags(["electronics", "computers"]),
        Product::new(ProductId(2), "Headphones", 149.99).with_tags(["electronics", "audio"]),
        Product::new(ProductId(3), "Mouse", 29.99),
    ];
    let by_tag = index_by_tag(&products);
    let electronics = by_tag.get("electronics").map_or(0, Vec::len);
    info!(electronics, "Number of electronic products");

    let cart = ShoppingCart::new();
    info!(items = cart.len(), total = cart.get_total(), "Cart constructed");

    match fibonacci(10) {
        Ok(sequence) => info!(?sequence, "Fibonacci sequence"),
        Err(e) => error!(error = %e, "Sequence generation failed"),
    }
}
