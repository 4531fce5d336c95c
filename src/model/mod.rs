//! Pure data structures: the [`Product`] record and its tag index helper.

pub mod product;

pub use product::*;
