//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the producer-db service requires from its deployment: a
//! byte-oriented key-value store and a clock.

use thiserror::Error;

/// Errors from the underlying key-value store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    Io {
        /// Description of the underlying failure.
        message: String,
    },

    /// Data corruption in the store.
    #[error("KV store corruption: {message}")]
    Corruption {
        /// Description of the corruption.
        message: String,
    },
}

/// Abstract interface for key-value storage.
///
/// This is the seam a production storage engine implements; the crate
/// ships [`crate::adapters::memory::InMemoryKVStore`] as the reference
/// adapter for tests and light embedding.
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Put a single key-value pair.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError>;

    /// Delete a key. Deleting an absent key succeeds.
    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError>;
}

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Current timestamp in seconds since epoch.
    fn now(&self) -> u64;
}

/// Default time source using system time.
#[derive(Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}
