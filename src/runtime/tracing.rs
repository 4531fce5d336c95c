//! # Observability & Tracing
//!
//! Structured logging setup for the demo. All human-readable output — the
//! timing reports, the driver's computed lists and status lines — goes
//! through `tracing`, so one subscriber configures it all.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable; when it is
//! unset the demo defaults to `info` so it prints without any setup. The
//! compact format hides the crate/module prefix (`with_target(false)`) to
//! keep log lines short.
//!
//! ```bash
//! # Default info logs
//! cargo run
//!
//! # Show file open/close and cart mutations
//! RUST_LOG=debug cargo run
//!
//! # Filter to a single module
//! RUST_LOG=cart_recipe::fs=debug cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber once for the whole process.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false) // Short lines; the message names the component
        .compact()
        .init();
}
