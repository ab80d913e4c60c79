//! # Adapters Layer
//!
//! Concrete fetch strategies implementing the ports.

pub mod offline;
