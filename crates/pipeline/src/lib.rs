//! Process-level plumbing around the deterministic triage core.
//!
//! The core engine is total and pure; everything that can vary per process
//! lives here: configuration resolved once at startup, the capability value
//! that says whether an extended (retrieval-augmented) backend is available,
//! the guardrail filter over extended responses, and the service that
//! dispatches requests on the capability.
//!
//! Degraded mode — the extended stack being unavailable — is not an error.
//! It is a silent, permanent fallback for the lifetime of the process,
//! observable only through the output shape.

mod capability;
mod config;
mod error;
mod extended;
mod guardrail;
mod service;

pub use capability::Capability;
pub use config::TriageConfig;
pub use error::{PipelineError, Result};
pub use extended::ExtendedBackend;
pub use guardrail::{response_ok, DISALLOWED_TERMS};
pub use service::TriageService;
