//! # Validation Errors
//!
//! The closed set of failure kinds a validator can record on a
//! [`crate::domain::state::ValidationState`]. Failures travel through the
//! state object rather than `Err` returns: a validation outcome is data,
//! inspected by the caller once the chain walk stops.

use std::fmt;
use thiserror::Error;

/// The kind of a validation failure.
///
/// The set is closed so that components dispatching on an outcome (logging,
/// metrics, retry policy in networked fetchers) can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// The signature did not verify against the certificate.
    InvalidSignature,

    /// The packet carries no signature.
    NoSignature,

    /// A certificate needed for the chain could not be retrieved.
    CannotRetrieveCertificate,

    /// A certificate in the chain is outside its validity period.
    ExpiredCertificate,

    /// The chain of key locators loops back on itself.
    LoopDetected,

    /// A retrieved certificate could not be decoded.
    MalformedCertificate,

    /// The chain exceeded the configured depth limit.
    ExceededDepthLimit,

    /// The packet's key locator does not name a usable key.
    InvalidKeyLocator,

    /// The trust policy rejected the packet.
    PolicyError,

    /// An internal error in the validator itself.
    ImplementationError,
}

impl ValidationErrorKind {
    /// Stable identifier for logs and interop with other validator
    /// components.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorKind::InvalidSignature => "INVALID_SIGNATURE",
            ValidationErrorKind::NoSignature => "NO_SIGNATURE",
            ValidationErrorKind::CannotRetrieveCertificate => "CANNOT_RETRIEVE_CERTIFICATE",
            ValidationErrorKind::ExpiredCertificate => "EXPIRED_CERTIFICATE",
            ValidationErrorKind::LoopDetected => "LOOP_DETECTED",
            ValidationErrorKind::MalformedCertificate => "MALFORMED_CERTIFICATE",
            ValidationErrorKind::ExceededDepthLimit => "EXCEEDED_DEPTH_LIMIT",
            ValidationErrorKind::InvalidKeyLocator => "INVALID_KEY_LOCATOR",
            ValidationErrorKind::PolicyError => "POLICY_ERROR",
            ValidationErrorKind::ImplementationError => "IMPLEMENTATION_ERROR",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validation failure: a kind plus a human-readable detail message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}: {detail}")]
pub struct ValidationError {
    kind: ValidationErrorKind,
    detail: String,
}

impl ValidationError {
    /// Create an error of `kind` with a detail message.
    pub fn new(kind: ValidationErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    /// The failure kind.
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// The detail message, unchanged from construction.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}
