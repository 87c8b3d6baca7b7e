//! Runtime settings
//!
//! Gameplay tuning is compile-time (`crate::consts`); these are the few
//! knobs worth overriding from a JSON file without rebuilding.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::EmitPolicy;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Particle RNG seed
    pub seed: u64,
    /// How an explosion burst claims particle slots
    pub emit_policy: EmitPolicy,
    pub particle_capacity: usize,
    /// Degrees of yaw/pitch per pixel of cursor travel
    pub mouse_sensitivity: f32,
    /// `pointSize` uniform for the particle program
    pub point_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,
            emit_policy: EmitPolicy::ReinitAll,
            particle_capacity: MAX_PARTICLES,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            point_size: PARTICLE_POINT_SIZE,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from `path`, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::from_path(path) {
            Ok(settings) => {
                log::info!("Loaded settings: {settings:?}");
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
