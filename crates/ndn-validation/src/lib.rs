//! # Validation Subsystem
//!
//! Certificate retrieval for trust-chain processing.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): validation outcomes, errors, and request
//!   entities, no I/O
//! - **Ports Layer** (`ports/`): the [`CertificateFetcher`] extension point
//! - **Adapters Layer** (`adapters/`): concrete fetch strategies; currently
//!   the offline (no-network) variant
//!
//! ## Completion Contract
//!
//! A fetch completes either by returning the retrieved certificate or by
//! recording exactly one failure on the [`ValidationState`], never both.
//! The surrounding validator continues the trust chain only when a
//! certificate comes back.

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-export public API
pub use adapters::offline::OfflineCertificateFetcher;
pub use domain::entities::{CertificateRequest, RetrievedCertificate, DEFAULT_FETCH_RETRIES};
pub use domain::errors::{ValidationError, ValidationErrorKind};
pub use domain::state::{ValidationOutcome, ValidationState};
pub use ports::fetcher::CertificateFetcher;
