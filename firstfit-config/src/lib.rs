//! # firstfit Configuration
//!
//! Layered configuration for the arena, its telemetry and the interactive
//! session.
//!
//! Hierarchy (later layers win):
//! 1. Built-in defaults
//! 2. `<dir>/firstfit.yaml`, when present
//! 3. `FIRSTFIT_*` environment variables, `__` separating sections
//!    (`FIRSTFIT_ARENA__ALIGNMENT=8`)

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod arena;
mod error;
mod repl;
mod telemetry;
mod validation;

pub use arena::ArenaConfig;
pub use error::ConfigError;
pub use repl::ReplConfig;
pub use telemetry::TelemetryConfig;
pub use validation::LOG_LEVELS;

pub const CONFIG_FILE: &str = "firstfit.yaml";
pub const ENV_PREFIX: &str = "FIRSTFIT_";

/// Top-level configuration container.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone, PartialEq)]
#[serde(default)]
pub struct FirstFitConfig {
    #[validate(nested)]
    pub arena: ArenaConfig,

    #[validate(nested)]
    pub telemetry: TelemetryConfig,

    #[validate(nested)]
    pub repl: ReplConfig,
}

impl FirstFitConfig {
    /// Load from `config/firstfit.yaml` (if present) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_dir("config")
    }

    /// Load from `<dir>/firstfit.yaml` (if present) and the environment.
    /// A missing file falls back to defaults.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(FirstFitConfig::default()));

        let file = dir.as_ref().join(CONFIG_FILE);
        if file.exists() {
            figment = figment.merge(Yaml::file(file));
        }

        Self::extract(figment)
    }

    /// Load from an explicit file, which must exist.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        let figment =
            Figment::from(Serialized::defaults(FirstFitConfig::default())).merge(Yaml::file(path));
        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }
}
