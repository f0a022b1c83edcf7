use serde::{Deserialize, Serialize};
use std::path::Path;

use scif_util::errors::{ScifError, ScifResult};

use crate::{DEFAULT_BASE, DEFAULT_SHELL};

/// Environment variable overriding the base root.
pub const BASE_ENV_VAR: &str = "SCIF_BASE";

/// Environment variable overriding the shell.
pub const SHELL_ENV_VAR: &str = "SCIF_SHELL";

/// Session defaults, optionally loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScifConfig {
    #[serde(default = "default_base")]
    pub base: String,

    #[serde(default = "default_shell")]
    pub shell: String,

    #[serde(default)]
    pub entrypoint: Option<String>,
}

impl Default for ScifConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            shell: default_shell(),
            entrypoint: None,
        }
    }
}

fn default_base() -> String {
    DEFAULT_BASE.to_string()
}

fn default_shell() -> String {
    DEFAULT_SHELL.to_string()
}

impl ScifConfig {
    /// Parse a config from a TOML string.
    pub fn parse_toml(toml_str: &str) -> ScifResult<Self> {
        toml::from_str(toml_str).map_err(|e| {
            ScifError::Config {
                message: format!("Failed to parse scif config: {e}"),
            }
            .into()
        })
    }

    /// Load a config from `path`, or return defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> ScifResult<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(ScifError::Io)?;
        Self::parse_toml(&content)
    }

    /// Apply `SCIF_BASE` / `SCIF_SHELL` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup. Empty values are ignored.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup(BASE_ENV_VAR).filter(|v| !v.is_empty()) {
            self.base = base;
        }
        if let Some(shell) = lookup(SHELL_ENV_VAR).filter(|v| !v.is_empty()) {
            self.shell = shell;
        }
        self
    }
}
