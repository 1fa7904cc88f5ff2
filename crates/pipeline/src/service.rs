use crate::capability::Capability;
use crate::error::{PipelineError, Result};
use crate::guardrail;
use triage_engine::TriageEngine;
use triage_protocol::TriageResult;

/// Request-facing triage service.
///
/// Sanitizes once per request, then dispatches on the process capability.
/// Core-only requests cannot fail; extended requests can be rejected by the
/// PII-sentinel abort, the backend, or the guardrail — all client errors.
pub struct TriageService {
    engine: TriageEngine,
    capability: Capability,
}

impl TriageService {
    #[must_use]
    pub fn new(capability: Capability) -> Self {
        Self {
            engine: TriageEngine::new(),
            capability,
        }
    }

    /// Service pinned to the deterministic core.
    #[must_use]
    pub fn core_only() -> Self {
        Self::new(Capability::CoreOnly)
    }

    #[must_use]
    pub fn is_extended(&self) -> bool {
        self.capability.is_extended()
    }

    pub async fn triage(&self, raw_text: &str) -> Result<TriageResult> {
        let sanitized = self.engine.sanitize(raw_text);
        match &self.capability {
            Capability::CoreOnly => Ok(self.engine.analyze(&sanitized)),
            Capability::CoreWithExtended(backend) => {
                if triage_redact::contains_pii_sentinel(&sanitized) {
                    return Err(PipelineError::PiiAbort);
                }
                let result = backend.triage(&sanitized).await?;
                let serialized = serde_json::to_string(&result)
                    .map_err(|err| PipelineError::Backend(err.to_string()))?;
                if !guardrail::response_ok(&serialized) {
                    return Err(PipelineError::Guardrail(format!(
                        "{} response contains a disallowed term",
                        backend.name()
                    )));
                }
                Ok(result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extended::ExtendedBackend;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use triage_protocol::{Clause, RiskLevel};

    struct FixedBackend {
        result: TriageResult,
    }

    #[async_trait]
    impl ExtendedBackend for FixedBackend {
        async fn triage(&self, _sanitized: &str) -> Result<TriageResult> {
            Ok(self.result.clone())
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl ExtendedBackend for FailingBackend {
        async fn triage(&self, _sanitized: &str) -> Result<TriageResult> {
            Err(PipelineError::Backend("model timeout".to_string()))
        }
    }

    fn extended_result(clause_text: &str) -> TriageResult {
        TriageResult {
            doc_type: "NDA".to_string(),
            clauses: vec![Clause {
                title: "Confidentiality".to_string(),
                text: clause_text.to_string(),
            }],
            risks: vec![],
        }
    }

    #[tokio::test]
    async fn core_only_requests_never_fail() {
        let service = TriageService::core_only();
        let result = service.triage("").await.unwrap();
        assert_eq!(result.doc_type, "General Contract");
        // Even sentinel-bearing input passes through the core path.
        let result = service.triage("pii_detected something").await.unwrap();
        assert_eq!(result.doc_type, "General Contract");
    }

    #[tokio::test]
    async fn core_path_redacts_before_analysis() {
        let service = TriageService::core_only();
        let result = service
            .triage("Employment terms for Jane Roe, unlimited liability.")
            .await
            .unwrap();
        assert_eq!(result.doc_type, "Employment Agreement");
        assert_eq!(result.risks[0].level, RiskLevel::High);
        assert!(!serde_json::to_string(&result).unwrap().contains("Jane Roe"));
    }

    #[tokio::test]
    async fn extended_result_passes_the_guardrail() {
        let backend = FixedBackend {
            result: extended_result("standard confidentiality obligations"),
        };
        let service = TriageService::new(Capability::with_backend(Box::new(backend)));
        let result = service.triage("non-disclosure agreement").await.unwrap();
        assert_eq!(result.doc_type, "NDA");
    }

    #[tokio::test]
    async fn guardrail_rejects_disallowed_terms() {
        let backend = FixedBackend {
            result: extended_result("this clause is illegal in most states"),
        };
        let service = TriageService::new(Capability::with_backend(Box::new(backend)));
        let err = service.triage("non-disclosure agreement").await.unwrap_err();
        assert!(matches!(err, PipelineError::Guardrail(_)));
        assert_eq!(err.client_code(), "guardrail_violation");
    }

    #[tokio::test]
    async fn sentinel_aborts_before_the_backend_runs() {
        let service = TriageService::new(Capability::with_backend(Box::new(FailingBackend)));
        let err = service.triage("pii_detected in scan").await.unwrap_err();
        assert!(matches!(err, PipelineError::PiiAbort));
    }

    #[tokio::test]
    async fn backend_errors_surface_as_client_errors() {
        let service = TriageService::new(Capability::with_backend(Box::new(FailingBackend)));
        let err = service.triage("lease agreement").await.unwrap_err();
        assert!(matches!(err, PipelineError::Backend(_)));
        assert_eq!(err.client_code(), "triage_failed");
    }
}
