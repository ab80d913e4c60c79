//! # Producer Content-Key Database
//!
//! Storage abstraction for the symmetric content keys a data producer uses
//! in a content-encryption scheme, bucketed by hourly time slots.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): time-slot math, key material, errors
//! - **Ports Layer** (`ports/`): the [`ProducerDbApi`] callers program
//!   against and the [`KeyValueStore`] seam a storage engine implements
//! - **Adapters Layer** (`adapters/`): the in-memory reference store
//! - **Service Layer** (`service.rs`): wires quantization, record
//!   serialization, and the store together
//!
//! Production storage engines plug in behind [`KeyValueStore`]; this crate
//! ships only the in-memory reference adapter.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::memory::InMemoryKVStore;
pub use domain::entities::{ContentKey, ContentKeyRecord, CONTENT_KEY_SIZE};
pub use domain::errors::ProducerDbError;
pub use domain::time_slot::{fixed_time_slot, MILLISECONDS_PER_HOUR};
pub use ports::inbound::ProducerDbApi;
pub use ports::outbound::{KVStoreError, KeyValueStore, SystemTimeSource, TimeSource};
pub use service::ProducerDb;
