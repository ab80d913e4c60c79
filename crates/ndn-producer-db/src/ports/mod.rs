//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: [`inbound::ProducerDbApi`], the database
//!   abstraction callers program against
//! - **Outbound (Driven)**: [`outbound::KeyValueStore`] and
//!   [`outbound::TimeSource`], the dependencies a deployment provides

pub mod inbound;
pub mod outbound;
