//! User-level configuration loaded from `~/.git-persona/config.toml`.
//!
//! The file is optional; every missing field falls back to its default.

mod loader;

pub use loader::{load_config, load_config_from};

use crate::git::DEFAULT_GIT_PROGRAM;
use crate::utils::persona_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

fn default_program() -> String {
    DEFAULT_GIT_PROGRAM.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// How git is invoked (`[git]` table).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GitSettings {
    /// Executable used for every git invocation.
    #[serde(default = "default_program")]
    pub program: String,
    /// Per-invocation limit in seconds; `0` waits forever.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            program: default_program(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GitSettings {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Where profiles are kept (`[store]` table).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StoreSettings {
    /// Overrides `~/.git-persona/profiles.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PersonaConfig {
    #[serde(default)]
    pub git: GitSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

/// Resolve the canonical path for the config file.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    persona_home().map(|home| home.join(CONFIG_FILE))
}

#[cfg(test)]
#[path = "../config_tests.rs"]
mod config_tests;
