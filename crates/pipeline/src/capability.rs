use crate::config::TriageConfig;
use crate::extended::{self, ExtendedBackend};

/// What this process can do, decided once at startup.
///
/// The two-variant shape replaces mutable mode flags: triage dispatches on
/// this value, and a failed extended-stack initialization is captured here
/// as `CoreOnly` rather than surfacing anywhere as an error.
pub enum Capability {
    /// Deterministic core only.
    CoreOnly,
    /// Core plus a configured extended backend.
    CoreWithExtended(Box<dyn ExtendedBackend>),
}

impl Capability {
    /// Probe the extended stack. Demo mode, a missing/empty template
    /// corpus, or any backend construction failure downgrades to
    /// `CoreOnly` — silently, for the lifetime of the process.
    #[must_use]
    pub fn initialize(config: &TriageConfig) -> Self {
        if config.demo_mode {
            log::info!("demo mode forced; using deterministic core");
            return Capability::CoreOnly;
        }
        match extended::try_init(config) {
            Ok(backend) => {
                log::info!("extended path available: {}", backend.name());
                Capability::CoreWithExtended(backend)
            }
            Err(err) => {
                log::info!("extended path unavailable, falling back to core: {err}");
                Capability::CoreOnly
            }
        }
    }

    /// Capability with an injected backend, for embedders and tests.
    #[must_use]
    pub fn with_backend(backend: Box<dyn ExtendedBackend>) -> Self {
        Capability::CoreWithExtended(backend)
    }

    #[must_use]
    pub fn is_extended(&self) -> bool {
        matches!(self, Capability::CoreWithExtended(_))
    }
}

impl std::fmt::Debug for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::CoreOnly => f.write_str("CoreOnly"),
            Capability::CoreWithExtended(backend) => f
                .debug_tuple("CoreWithExtended")
                .field(&backend.name())
                .finish(),
        }
    }
}
