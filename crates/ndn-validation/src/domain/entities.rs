//! # Domain Entities
//!
//! Request and result value types for certificate retrieval.

use ndn_wire::Name;
use serde::{Deserialize, Serialize};

/// Default number of retries a networked fetcher gets before giving up.
pub const DEFAULT_FETCH_RETRIES: u32 = 3;

/// Descriptor of a certificate a validator wants retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRequest {
    /// Name of the desired certificate.
    pub name: Name,

    /// Retries remaining for fetch strategies that retry. The offline
    /// strategy ignores this by contract.
    pub retries_left: u32,
}

impl CertificateRequest {
    /// Create a request for `name` with the default retry budget.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            retries_left: DEFAULT_FETCH_RETRIES,
        }
    }
}

/// A certificate as retrieved by a fetch strategy: the name it was fetched
/// under plus its raw wire bytes.
///
/// Decoding and trust evaluation of the bytes are the responsibility of the
/// surrounding validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievedCertificate {
    /// Name the certificate was retrieved under.
    pub name: Name,

    /// Raw certificate wire bytes.
    pub wire: Vec<u8>,
}

impl RetrievedCertificate {
    /// Create a retrieved certificate.
    pub fn new(name: Name, wire: impl Into<Vec<u8>>) -> Self {
        Self {
            name,
            wire: wire.into(),
        }
    }
}
