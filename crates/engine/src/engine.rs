use crate::classifier::DocumentClassifier;
use crate::clauses::ClauseExtractor;
use crate::risks::RiskEvaluator;
use triage_protocol::TriageResult;
use triage_redact::Redactor;

/// Composes redaction, classification, clause extraction, and risk
/// evaluation into a single triage pass.
///
/// Pure and idempotent: triaging the same input twice yields identical
/// output. There is no failure path — any string, including the empty
/// string, is a valid document.
#[derive(Debug, Default, Clone, Copy)]
pub struct TriageEngine {
    redactor: Redactor,
    classifier: DocumentClassifier,
    extractor: ClauseExtractor,
    evaluator: RiskEvaluator,
}

impl TriageEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with non-default rule tables, mainly for tests.
    #[must_use]
    pub const fn with_components(
        redactor: Redactor,
        classifier: DocumentClassifier,
        extractor: ClauseExtractor,
        evaluator: RiskEvaluator,
    ) -> Self {
        Self {
            redactor,
            classifier,
            extractor,
            evaluator,
        }
    }

    /// Sanitized view of the input, exactly as the analysis stages see it.
    #[must_use]
    pub fn sanitize(&self, raw_text: &str) -> String {
        self.redactor.redact(raw_text)
    }

    /// Run the three analysis stages over already-sanitized text.
    ///
    /// Callers outside the request boundary should prefer [`triage`], which
    /// enforces the sanitize-first invariant.
    ///
    /// [`triage`]: TriageEngine::triage
    #[must_use]
    pub fn analyze(&self, sanitized: &str) -> TriageResult {
        let result = TriageResult {
            doc_type: self.classifier.classify(sanitized).to_string(),
            clauses: self.extractor.extract(sanitized),
            risks: self.evaluator.evaluate(sanitized),
        };
        log::debug!(
            "triage: type={} clauses={} risks={}",
            result.doc_type,
            result.clauses.len(),
            result.risks.len()
        );
        result
    }

    /// Full pass: sanitize, then analyze.
    #[must_use]
    pub fn triage(&self, raw_text: &str) -> TriageResult {
        self.analyze(&self.sanitize(raw_text))
    }
}
