//! # Validation State
//!
//! Mutable per-packet tracker for the outcome of a trust-chain walk. Each
//! packet being validated gets its own state; states share no data, so
//! concurrent validations are independent.

use crate::domain::errors::ValidationError;

/// The outcome of validating a single packet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationOutcome {
    /// No outcome recorded yet.
    #[default]
    Pending,

    /// The trust chain verified successfully.
    Verified,

    /// Validation failed with the recorded error.
    Failed(ValidationError),
}

/// Tracks the progress of validating one packet.
///
/// The first recorded outcome settles the state; later `fail`/`succeed`
/// calls are ignored so a settled result cannot be overwritten mid-chain.
#[derive(Debug, Clone, Default)]
pub struct ValidationState {
    outcome: ValidationOutcome,
}

impl ValidationState {
    /// Create a pending state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure.
    ///
    /// Ignored (with a warning) if the state already has an outcome.
    pub fn fail(&mut self, error: ValidationError) {
        if self.has_outcome() {
            tracing::warn!(%error, "ignoring failure on settled validation state");
            return;
        }
        tracing::debug!(%error, "validation failed");
        self.outcome = ValidationOutcome::Failed(error);
    }

    /// Record success.
    ///
    /// Ignored (with a warning) if the state already has an outcome.
    pub fn succeed(&mut self) {
        if self.has_outcome() {
            tracing::warn!("ignoring success on settled validation state");
            return;
        }
        self.outcome = ValidationOutcome::Verified;
    }

    /// True once `fail` or `succeed` has been recorded.
    pub fn has_outcome(&self) -> bool {
        self.outcome != ValidationOutcome::Pending
    }

    /// True if the recorded outcome is a failure.
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, ValidationOutcome::Failed(_))
    }

    /// True if the recorded outcome is success.
    pub fn is_verified(&self) -> bool {
        self.outcome == ValidationOutcome::Verified
    }

    /// The recorded outcome.
    pub fn outcome(&self) -> &ValidationOutcome {
        &self.outcome
    }

    /// The recorded failure, if any.
    pub fn error(&self) -> Option<&ValidationError> {
        match &self.outcome {
            ValidationOutcome::Failed(error) => Some(error),
            _ => None,
        }
    }
}
