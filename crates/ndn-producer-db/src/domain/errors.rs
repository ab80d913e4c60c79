//! # Database Errors
//!
//! Failures from producer key-database operations. The error carries a
//! human-readable message that survives construction and display
//! byte-for-byte; the convenience constructors below produce the fixed
//! messages implementations use.

use std::fmt;
use thiserror::Error;

/// Failure from a producer key-database operation.
///
/// Terminal for the operation that produced it; callers decide whether to
/// recover or escalate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ProducerDbError {
    message: String,
}

impl ProducerDbError {
    /// Create an error carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The stored message, unchanged.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// A content key already exists for the hour bucket.
    pub fn key_exists(time_slot: i64) -> Self {
        Self::new(format!(
            "Producer db already has a content key for time slot {time_slot}"
        ))
    }

    /// No content key exists for the hour bucket.
    pub fn key_not_found(time_slot: i64) -> Self {
        Self::new(format!(
            "Producer db has no content key for time slot {time_slot}"
        ))
    }

    /// The underlying store or record codec failed.
    pub fn database(detail: impl fmt::Display) -> Self {
        Self::new(format!("Producer db database error: {detail}"))
    }
}
