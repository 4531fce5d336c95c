//! Runtime infrastructure for the demo binary.
//!
//! # Main Components
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure
//!
//! # Future Additions
//!
//! As the crate grows, this module may include:
//! - Configuration management
//! - Metrics collection

pub mod tracing;

pub use tracing::*;
