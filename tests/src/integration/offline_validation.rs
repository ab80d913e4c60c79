//! # Offline Validation Flow
//!
//! Drives the certificate-fetch port the way a validator would: requests go
//! through `fetch`, outcomes land on the per-packet validation state, and
//! the chain continues only when a certificate comes back.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use ndn_validation::{
        CertificateFetcher, CertificateRequest, OfflineCertificateFetcher, RetrievedCertificate,
        ValidationErrorKind, ValidationState,
    };
    use ndn_wire::{Name, TlvWireFormat, WireFormat};

    /// Fetcher backed by a fixed set of certificates, standing in for a
    /// networked strategy with a warm cache.
    struct StaticStoreFetcher {
        certificates: Vec<RetrievedCertificate>,
    }

    #[async_trait]
    impl CertificateFetcher for StaticStoreFetcher {
        async fn do_fetch(
            &self,
            request: &CertificateRequest,
            state: &mut ValidationState,
        ) -> Option<RetrievedCertificate> {
            match self
                .certificates
                .iter()
                .find(|cert| cert.name == request.name)
            {
                Some(cert) => Some(cert.clone()),
                None => {
                    state.fail(ndn_validation::ValidationError::new(
                        ValidationErrorKind::CannotRetrieveCertificate,
                        format!("no stored certificate for {}", request.name.to_uri()),
                    ));
                    None
                }
            }
        }
    }

    /// Drive one fetch step the way a validator does: continue on a
    /// certificate, stop on a settled state.
    async fn fetch_step(
        fetcher: &dyn CertificateFetcher,
        name: &Name,
        state: &mut ValidationState,
    ) -> Option<RetrievedCertificate> {
        let request = CertificateRequest::new(name.clone());
        fetcher.fetch(&request, state).await
    }

    #[tokio::test]
    async fn test_offline_fetch_settles_state_and_stops_the_chain() {
        crate::integration::init_tracing();
        let fetcher = OfflineCertificateFetcher::new();
        let name = Name::from_uri("/a/b/KEY/123").unwrap();
        let mut state = ValidationState::new();

        let fetched = fetch_step(&fetcher, &name, &mut state).await;

        // Failure path: no certificate, exactly one settled failure.
        assert!(fetched.is_none());
        assert!(state.is_failed());
        let error = state.error().unwrap();
        assert_eq!(error.kind(), ValidationErrorKind::CannotRetrieveCertificate);
        assert_eq!(
            error.detail(),
            "Cannot fetch certificate /a/b/KEY/123 in offline mode"
        );
    }

    #[tokio::test]
    async fn test_offline_failures_are_deterministic_across_packets() {
        let fetcher = OfflineCertificateFetcher::new();
        let name = Name::from_uri("/a/b/KEY/123").unwrap();

        let mut states = Vec::new();
        for _ in 0..3 {
            let mut state = ValidationState::new();
            assert!(fetch_step(&fetcher, &name, &mut state).await.is_none());
            states.push(state);
        }

        let first = states[0].error().unwrap().clone();
        for state in &states {
            assert_eq!(state.error(), Some(&first));
        }
    }

    #[tokio::test]
    async fn test_store_backed_fetcher_continues_the_chain() {
        let key_name = Name::from_uri("/producer/KEY/42").unwrap();
        let wire = TlvWireFormat::new().encode_name(&key_name).unwrap();
        let fetcher = StaticStoreFetcher {
            certificates: vec![RetrievedCertificate::new(key_name.clone(), wire.clone())],
        };

        let mut state = ValidationState::new();
        let fetched = fetch_step(&fetcher, &key_name, &mut state).await;

        // Success path: certificate returned, state untouched, and the
        // wire bytes decode back to the certificate name.
        let cert = fetched.unwrap();
        assert!(!state.has_outcome());
        assert_eq!(
            TlvWireFormat::new().decode_name(&cert.wire).unwrap(),
            key_name
        );

        // A miss settles the state instead.
        let missing = Name::from_uri("/other/KEY/1").unwrap();
        let mut miss_state = ValidationState::new();
        assert!(fetch_step(&fetcher, &missing, &mut miss_state).await.is_none());
        assert!(miss_state.is_failed());
    }

    #[tokio::test]
    async fn test_swapping_strategies_changes_only_the_outcome_source() {
        // The same driving code works for both strategies; only the
        // configured fetcher decides between failure and success.
        let name = Name::from_uri("/site/KEY/7").unwrap();
        let offline: Box<dyn CertificateFetcher> = Box::new(OfflineCertificateFetcher::new());
        let stored: Box<dyn CertificateFetcher> = Box::new(StaticStoreFetcher {
            certificates: vec![RetrievedCertificate::new(name.clone(), vec![6, 0])],
        });

        let mut offline_state = ValidationState::new();
        assert!(fetch_step(offline.as_ref(), &name, &mut offline_state)
            .await
            .is_none());
        assert!(offline_state.is_failed());

        let mut stored_state = ValidationState::new();
        assert!(fetch_step(stored.as_ref(), &name, &mut stored_state)
            .await
            .is_some());
        assert!(!stored_state.has_outcome());
    }
}
