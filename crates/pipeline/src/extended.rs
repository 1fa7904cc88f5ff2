use crate::config::TriageConfig;
use crate::error::{PipelineError, Result};
use async_trait::async_trait;
use std::fs;
use triage_protocol::TriageResult;

/// Collaborator interface for the retrieval-augmented extended path.
///
/// Implementations receive already-sanitized text (redaction happens
/// upstream, unconditionally) and typically prompt a hosted model over a
/// bounded prefix of it with retrieval context from the template corpus.
/// This repository ships no implementation — the collaborator is external —
/// only the trait and the capability plumbing around it.
#[async_trait]
pub trait ExtendedBackend: Send + Sync {
    /// Run retrieval-augmented triage over sanitized text.
    async fn triage(&self, sanitized: &str) -> Result<TriageResult>;

    /// Short identifier for logs.
    fn name(&self) -> &'static str {
        "extended"
    }
}

/// Probe the extended stack's preconditions and construct a backend.
///
/// Preconditions, checked in order: a non-empty template corpus directory
/// and a hosted-model credential. With both met, construction still reports
/// unavailability here because no backend implementation is compiled in;
/// embedders inject one via [`Capability::with_backend`].
///
/// [`Capability::with_backend`]: crate::Capability::with_backend
pub(crate) fn try_init(config: &TriageConfig) -> Result<Box<dyn ExtendedBackend>> {
    let dir = &config.templates_dir;
    let has_templates = fs::read_dir(dir)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false);
    if !has_templates {
        return Err(PipelineError::BackendUnavailable(format!(
            "no template corpus at {}",
            dir.display()
        )));
    }
    if config.api_key.is_none() {
        return Err(PipelineError::BackendUnavailable(
            "no hosted-model credential".to_string(),
        ));
    }
    Err(PipelineError::BackendUnavailable(
        "no extended backend compiled in".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_with_dir(dir: PathBuf) -> TriageConfig {
        TriageConfig {
            demo_mode: false,
            api_key: Some("sk-test".to_string()),
            templates_dir: dir,
        }
    }

    #[test]
    fn missing_corpus_reports_unavailable() {
        let config = config_with_dir(PathBuf::from("/nonexistent/templates"));
        let err = match try_init(&config) {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        assert!(matches!(err, PipelineError::BackendUnavailable(_)));
    }

    #[test]
    fn empty_corpus_reports_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = match try_init(&config_with_dir(dir.path().to_path_buf())) {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        assert!(matches!(err, PipelineError::BackendUnavailable(_)));
    }

    #[test]
    fn missing_credential_reports_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("nda.txt"), "template").unwrap();
        let mut config = config_with_dir(dir.path().to_path_buf());
        config.api_key = None;
        let err = match try_init(&config) {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("credential"));
    }
}
