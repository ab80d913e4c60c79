//! # Producer Database Service
//!
//! Application service that implements [`ProducerDbApi`] over a
//! [`KeyValueStore`]: timestamps are quantized to hour buckets, records are
//! bincode-encoded, and store keys are the bucket index behind a fixed
//! prefix.

use crate::domain::entities::{ContentKey, ContentKeyRecord, CONTENT_KEY_SIZE};
use crate::domain::errors::ProducerDbError;
use crate::domain::time_slot::fixed_time_slot;
use crate::ports::inbound::ProducerDbApi;
use crate::ports::outbound::{KeyValueStore, SystemTimeSource, TimeSource};

/// Store-key prefix for content-key records.
const CONTENT_KEY_PREFIX: &[u8] = b"ckey:";

/// Build the store key for an hour bucket: `ckey:` + 8-byte big-endian
/// slot index.
fn content_key_store_key(time_slot: i64) -> Vec<u8> {
    let mut key = Vec::with_capacity(CONTENT_KEY_PREFIX.len() + 8);
    key.extend_from_slice(CONTENT_KEY_PREFIX);
    key.extend_from_slice(&time_slot.to_be_bytes());
    key
}

/// Producer key database over a pluggable store.
pub struct ProducerDb<S: KeyValueStore> {
    store: S,
    time: Box<dyn TimeSource>,
}

impl<S: KeyValueStore> ProducerDb<S> {
    /// Create a database over `store` using the system clock.
    pub fn new(store: S) -> Self {
        Self::with_time_source(store, Box::new(SystemTimeSource))
    }

    /// Create a database with an explicit clock, for tests.
    pub fn with_time_source(store: S, time: Box<dyn TimeSource>) -> Self {
        Self { store, time }
    }

    /// Consume the database and return the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> ProducerDbApi for ProducerDb<S> {
    fn has_content_key(&self, time_slot_ms: f64) -> Result<bool, ProducerDbError> {
        let slot = fixed_time_slot(time_slot_ms);
        self.store
            .exists(&content_key_store_key(slot))
            .map_err(ProducerDbError::database)
    }

    fn get_content_key(&self, time_slot_ms: f64) -> Result<ContentKey, ProducerDbError> {
        let slot = fixed_time_slot(time_slot_ms);
        let bytes = self
            .store
            .get(&content_key_store_key(slot))
            .map_err(ProducerDbError::database)?
            .ok_or_else(|| ProducerDbError::key_not_found(slot))?;

        let record: ContentKeyRecord =
            bincode::deserialize(&bytes).map_err(ProducerDbError::database)?;
        let bits: [u8; CONTENT_KEY_SIZE] = record.key.as_slice().try_into().map_err(|_| {
            ProducerDbError::database(format!(
                "stored content key for time slot {slot} has unexpected length {}",
                record.key.len()
            ))
        })?;
        Ok(ContentKey::from_bytes(bits))
    }

    fn add_content_key(
        &mut self,
        time_slot_ms: f64,
        key: &ContentKey,
    ) -> Result<(), ProducerDbError> {
        let slot = fixed_time_slot(time_slot_ms);
        let store_key = content_key_store_key(slot);

        if self
            .store
            .exists(&store_key)
            .map_err(ProducerDbError::database)?
        {
            return Err(ProducerDbError::key_exists(slot));
        }

        let record = ContentKeyRecord {
            time_slot: slot,
            key: key.as_bytes().to_vec(),
            created_at: self.time.now(),
        };
        let bytes = bincode::serialize(&record).map_err(ProducerDbError::database)?;
        self.store
            .put(&store_key, &bytes)
            .map_err(ProducerDbError::database)?;

        tracing::debug!(time_slot = slot, "stored content key");
        Ok(())
    }

    fn delete_content_key(&mut self, time_slot_ms: f64) -> Result<(), ProducerDbError> {
        let slot = fixed_time_slot(time_slot_ms);
        self.store
            .delete(&content_key_store_key(slot))
            .map_err(ProducerDbError::database)?;

        tracing::debug!(time_slot = slot, "deleted content key");
        Ok(())
    }
}
