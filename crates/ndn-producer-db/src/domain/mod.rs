//! # Domain Layer
//!
//! Pure logic with no I/O dependencies: time-slot quantization, key
//! material, and the database error type.

pub mod entities;
pub mod errors;
pub mod time_slot;
