//! # Certificate-Fetch Port
//!
//! The pluggable retrieval strategy a validator uses to obtain the next
//! certificate of a trust chain. Deployment code selects the concrete
//! strategy: offline (this workspace), networked, or retrying variants.

use crate::domain::entities::{CertificateRequest, RetrievedCertificate};
use crate::domain::state::ValidationState;
use async_trait::async_trait;

/// A strategy for retrieving certificates during validation.
///
/// ## Completion Contract
///
/// `do_fetch` completes in exactly one of two ways:
///
/// - **Success**: returns `Some(certificate)` and leaves `state` untouched.
/// - **Failure**: calls [`ValidationState::fail`] exactly once and returns
///   `None`.
///
/// The caller continues the trust chain only on `Some`, so a failed fetch
/// can never reach the success path.
///
/// Implementations must be thread-safe (`Send + Sync`); each concurrent
/// fetch gets its own request and state.
#[async_trait]
pub trait CertificateFetcher: Send + Sync {
    /// Retrieve the certificate described by `request`.
    async fn do_fetch(
        &self,
        request: &CertificateRequest,
        state: &mut ValidationState,
    ) -> Option<RetrievedCertificate>;

    /// Entry point used by the validator: logs the attempt and delegates to
    /// [`CertificateFetcher::do_fetch`].
    async fn fetch(
        &self,
        request: &CertificateRequest,
        state: &mut ValidationState,
    ) -> Option<RetrievedCertificate> {
        tracing::debug!(name = %request.name, "fetching certificate");
        self.do_fetch(request, state).await
    }
}
