//! # Offline Certificate Fetcher
//!
//! The fetch strategy for deployments where network retrieval is not
//! permitted: air-gapped hosts, tests, and offline validation of
//! pre-provisioned packets. Every fetch fails immediately with
//! `CANNOT_RETRIEVE_CERTIFICATE`; validation then relies entirely on
//! certificates the application already holds.

use crate::domain::entities::{CertificateRequest, RetrievedCertificate};
use crate::domain::errors::{ValidationError, ValidationErrorKind};
use crate::domain::state::ValidationState;
use crate::ports::fetcher::CertificateFetcher;
use async_trait::async_trait;

/// Fetch strategy that refuses every retrieval.
///
/// Deterministic and synchronous: the returned future is immediately ready,
/// no network or persistent resource is touched, and the retry budget on
/// the request is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineCertificateFetcher;

impl OfflineCertificateFetcher {
    /// Create the offline fetcher.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CertificateFetcher for OfflineCertificateFetcher {
    async fn do_fetch(
        &self,
        request: &CertificateRequest,
        state: &mut ValidationState,
    ) -> Option<RetrievedCertificate> {
        tracing::debug!(name = %request.name, "offline mode refuses certificate fetch");
        // The message text is part of the observable contract; callers and
        // log-matching tests depend on it verbatim.
        state.fail(ValidationError::new(
            ValidationErrorKind::CannotRetrieveCertificate,
            format!(
                "Cannot fetch certificate {} in offline mode",
                request.name.to_uri()
            ),
        ));
        None
    }
}
