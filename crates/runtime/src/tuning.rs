//! RON tuning-file loading.
//!
//! Hosts override individual [`EncounterConfig`] fields through a RON file;
//! anything not mentioned keeps its default. The merged config is validated
//! before it is handed out, so a bad tuning file fails at load time instead
//! of mid-fight.

use std::fs;
use std::path::Path;

use encounter_core::{ConfigError, EncounterConfig};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning file: {0}")]
    Parse(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Loads an encounter config from a RON file at `path`.
pub fn load_tuning(path: impl AsRef<Path>) -> Result<EncounterConfig, TuningError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let cfg: EncounterConfig =
        ron::from_str(&text).map_err(|err| TuningError::Parse(err.to_string()))?;
    cfg.validate()?;
    info!(path = %path.display(), "tuning loaded");
    Ok(cfg)
}
