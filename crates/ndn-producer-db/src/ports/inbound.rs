//! # Inbound Ports (Driving Ports / API)
//!
//! The producer key-database abstraction callers program against.

use crate::domain::entities::ContentKey;
use crate::domain::errors::ProducerDbError;

/// Primary producer key-database API.
///
/// Every operation takes a millisecond-since-epoch timestamp and addresses
/// the hour bucket it quantizes into, so any two timestamps within the same
/// hour address the same key.
pub trait ProducerDbApi: Send + Sync {
    /// True if a content key exists for the hour covering `time_slot_ms`.
    fn has_content_key(&self, time_slot_ms: f64) -> Result<bool, ProducerDbError>;

    /// The content key for the hour covering `time_slot_ms`.
    ///
    /// # Errors
    /// Fails if no key is stored for that hour.
    fn get_content_key(&self, time_slot_ms: f64) -> Result<ContentKey, ProducerDbError>;

    /// Store `key` for the hour covering `time_slot_ms`.
    ///
    /// # Errors
    /// Fails if a key already exists for that hour; keys are written once
    /// per rotation.
    fn add_content_key(&mut self, time_slot_ms: f64, key: &ContentKey)
        -> Result<(), ProducerDbError>;

    /// Remove the content key for the hour covering `time_slot_ms`.
    ///
    /// Removing an absent key is a no-op success.
    fn delete_content_key(&mut self, time_slot_ms: f64) -> Result<(), ProducerDbError>;
}
