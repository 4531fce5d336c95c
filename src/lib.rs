#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Cart Recipe
//!
//! > **A Recipe for Small, Self-Contained Building Blocks in Rust.**
//!
//! This crate demonstrates a handful of everyday Rust patterns through a tiny
//! shop domain: a plain record type, a decorator-style timing wrapper, a
//! guard-based scoped file handle, an ordered aggregator, and an iterative
//! sequence generator. Each component stands alone — there is no engine
//! underneath, and that is the point.
//!
//! ## 🚀 Core Concepts
//!
//! ### RAII: Release Is a Type, Not a Convention
//! The [`fs`] module shows scoped resource handling the Rust way: acquiring a
//! file yields a guard whose `Drop` closes it on *every* exit path, normal or
//! panicking. No `finally` block, no cleanup call to forget.
//!
//! ### Higher-Order Functions: Decorators Without Decorators
//! The [`timing`] module wraps any callable in a closure that measures and
//! reports its wall-clock duration, passing the result through unchanged.
//! Closures capture their arguments, which is how Rust spells `*args`.
//!
//! ### Builders Instead of Optional Parameters
//! [`Product`](model::Product) takes its optional pieces (`tags`,
//! `in_stock`) through chainable `with_*` methods, so "absent tags" can never
//! be observed — construction always yields a concrete, possibly empty, vec.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] — the [`Product`](model::Product) record, its
//!   [`apply_discount`](model::Product::apply_discount) computation, and the
//!   transient [`index_by_tag`](model::index_by_tag) grouping helper.
//! - [`cart`] — [`ShoppingCart`](cart::ShoppingCart), an ordered aggregator
//!   with repeated insertion and a sum-based total.
//! - [`timing`] — [`timed`](timing::timed), the measuring wrapper, and
//!   [`time`](timing::time), its report-free core.
//! - [`fs`] — [`FileManager`](fs::FileManager) and
//!   [`FileGuard`](fs::FileGuard), the scoped file handle.
//! - [`sequence`] — [`fibonacci`](sequence::fibonacci), a materialized
//!   first-N generator with an explicit representation bound.
//! - [`runtime`] — [`setup_tracing`](runtime::setup_tracing), observability
//!   bootstrap for the demo binary.
//!
//! ## 🚀 Quick Start
//!
//! ### Running the Demo
//!
//! ```bash
//! # Run with default info logs
//! cargo run
//!
//! # Show file open/close and cart internals
//! RUST_LOG=debug cargo run
//! ```
//!
//! The demo reads one line from stdin (an integer parse exercise), so run it
//! interactively.
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod cart;
pub mod fs;
pub mod model;
pub mod runtime;
pub mod sequence;
pub mod timing;
