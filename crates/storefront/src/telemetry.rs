//! Log output for the binary and for tests that want to see actor traffic.
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per actor operation
//! RUST_LOG=debug cargo run     # plus request payloads
//! ```

use tracing_subscriber::EnvFilter;

/// Installs a compact fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
