//! # Domain Entities
//!
//! Content-key material and the record shape stored per hour bucket.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroize;

/// Size of a content key in bytes (256-bit).
pub const CONTENT_KEY_SIZE: usize = 32;

/// Symmetric content-encryption key material.
///
/// Cleared from memory on drop. `Debug` redacts the bytes.
#[derive(Clone, Zeroize, PartialEq, Eq)]
#[zeroize(drop)]
pub struct ContentKey([u8; CONTENT_KEY_SIZE]);

impl ContentKey {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; CONTENT_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Generate a random key.
    pub fn generate() -> Self {
        let mut bytes = [0u8; CONTENT_KEY_SIZE];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; CONTENT_KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContentKey(..)")
    }
}

/// The record persisted per hour bucket through the key-value port.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentKeyRecord {
    /// Hour bucket the key belongs to.
    pub time_slot: i64,

    /// Raw key bytes.
    pub key: Vec<u8>,

    /// Seconds since epoch when the key was stored.
    pub created_at: u64,
}
