use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("config error: {0}")]
    Config(String),

    #[error("extended backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("extended backend error: {0}")]
    Backend(String),

    #[error("guardrail violation: {0}")]
    Guardrail(String),

    #[error("PII detected - abort")]
    PiiAbort,
}

impl PipelineError {
    /// Boundary rejections are client errors; everything here maps to one.
    #[must_use]
    pub const fn client_code(&self) -> &'static str {
        match self {
            PipelineError::Config(_) => "invalid_config",
            PipelineError::BackendUnavailable(_) | PipelineError::Backend(_) => "triage_failed",
            PipelineError::Guardrail(_) => "guardrail_violation",
            PipelineError::PiiAbort => "pii_abort",
        }
    }
}
