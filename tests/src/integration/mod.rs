//! # Integration Tests
//!
//! Cross-crate choreography: validation flows driven through the fetcher
//! port, the producer key lifecycle, and the process-wide wire-format
//! registry.

pub mod offline_validation;
pub mod producer_keys;

/// Install a fmt subscriber once so `RUST_LOG` filters test output.
///
/// Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
