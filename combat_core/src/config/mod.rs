//! Configuration loading
//!
//! Tunables are carried in an explicit [`CombatConfig`] value that callers pass
//! into the resolvers. There is no global instance.

mod constants;

pub use constants::{
    CombatConfig, DamageReductionConstants, HitCountConstants, MultiHitConstants,
    PostureConstants,
};

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error loading or validating combat configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: PathBuf,
    },
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported config format: '{0:?}' (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Read a file to a string, attaching the path to IO errors
pub(crate) fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
        error,
        path: path.to_path_buf(),
    })
}

/// Parse TOML content into any deserializable config type
pub(crate) fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Parse JSON content into any deserializable config type
pub(crate) fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(serde_json::from_str(content)?)
}
