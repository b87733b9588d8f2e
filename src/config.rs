//! Configuration loaded from environment variables (and `.env` via dotenvy).

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_ARTIFACT_DIR: &str = "./models";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `{bank_code}_scaler.json` / `{bank_code}_model.json`
    pub artifact_dir: PathBuf,
    /// Check artifact bank_code / feature_names provenance when present
    pub artifact_validation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from(DEFAULT_ARTIFACT_DIR),
            artifact_validation: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let artifact_dir = lookup("ARTIFACT_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACT_DIR));

        let artifact_validation = match lookup("ARTIFACT_VALIDATION") {
            Some(raw) => raw
                .trim()
                .to_lowercase()
                .parse::<bool>()
                .with_context(|| format!("Invalid ARTIFACT_VALIDATION: {}", raw))?,
            None => true,
        };

        Ok(Self {
            artifact_dir,
            artifact_validation,
        })
    }
}
