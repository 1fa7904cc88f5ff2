use crate::error::{PipelineError, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable forcing demo/core-only mode.
pub const ENV_DEMO_MODE: &str = "TRIAGE_DEMO_MODE";
/// Environment variable holding the hosted-model credential.
pub const ENV_API_KEY: &str = "CLAUDE_API_KEY";
/// Environment variable overriding the template corpus directory.
pub const ENV_TEMPLATES_DIR: &str = "TRIAGE_TEMPLATES_DIR";

const DEFAULT_TEMPLATES_DIR: &str = "legal_templates";

/// Process configuration, constructed once at startup and passed by
/// reference from then on. No component reads ambient environment state
/// after this is built, which keeps triage deterministic under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageConfig {
    /// Force the deterministic core regardless of template availability.
    pub demo_mode: bool,
    /// Hosted-model credential for the extended path.
    pub api_key: Option<String>,
    /// Template corpus directory probed by the extended path.
    pub templates_dir: PathBuf,
}

/// TOML overlay with the same fields, all optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    demo_mode: Option<bool>,
    api_key: Option<String>,
    templates_dir: Option<PathBuf>,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            demo_mode: false,
            api_key: None,
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
        }
    }
}

impl TriageConfig {
    /// Snapshot the environment. Called once, from `main`.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            demo_mode: env::var(ENV_DEMO_MODE).is_ok_and(|v| env_truthy(&v)),
            api_key: env::var(ENV_API_KEY).ok().filter(|v| !v.is_empty()),
            templates_dir: env::var(ENV_TEMPLATES_DIR)
                .map_or(defaults.templates_dir, PathBuf::from),
        }
    }

    /// Overlay a TOML file on top of this configuration. Fields absent from
    /// the file keep their current values.
    pub fn overlay_file(mut self, path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| PipelineError::Config(format!("{}: {err}", path.display())))?;
        let file: ConfigFile = toml::from_str(&raw)
            .map_err(|err| PipelineError::Config(format!("{}: {err}", path.display())))?;

        if let Some(demo_mode) = file.demo_mode {
            self.demo_mode = demo_mode;
        }
        if let Some(api_key) = file.api_key {
            self.api_key = Some(api_key);
        }
        if let Some(templates_dir) = file.templates_dir {
            self.templates_dir = templates_dir;
        }
        Ok(self)
    }
}

fn env_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
