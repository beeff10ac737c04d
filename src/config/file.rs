//! YAML config file loading.
//!
//! A run can name a config file with `--config`; otherwise a
//! `.near-dedup.yaml` in the working directory is picked up when present.
//! An explicitly named file that fails to load aborts the run, while a
//! broken discovered file only logs a warning and falls back to defaults.

use super::types::AppConfig;
use crate::error::{DedupError, Result};
use std::path::{Path, PathBuf};

/// File picked up from the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_NAME: &str = ".near-dedup.yaml";

/// Read an [`AppConfig`] from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| DedupError::io(path, e))?;
    serde_yaml::from_str(&content)
        .map_err(|e| DedupError::config(format!("{}: {e}", path.display())))
}

/// Resolve the effective configuration for a run, returning the path it
/// was loaded from, when any.
pub fn load_or_default(explicit: Option<&Path>) -> Result<(AppConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let config = load_config_file(path)?;
        return Ok((config, Some(path.to_path_buf())));
    }

    let local = PathBuf::from(DEFAULT_CONFIG_NAME);
    if !local.exists() {
        return Ok((AppConfig::default(), None));
    }
    match load_config_file(&local) {
        Ok(config) => Ok((config, Some(local))),
        Err(e) => {
            tracing::warn!("ignoring {}: {e}", local.display());
            Ok((AppConfig::default(), None))
        }
    }
}
