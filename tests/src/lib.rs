//! # NDN-Trust Test Suite
//!
//! Unified test crate for flows that span more than one workspace crate.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── offline_validation.rs  # fetcher port + validation state flows
//!     ├── producer_keys.rs       # content-key lifecycle over the store
//!     └── wire_registry.rs       # wire-format registry contract
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ndn-tests
//!
//! # By category
//! cargo test -p ndn-tests integration::
//! ```

pub mod integration;
