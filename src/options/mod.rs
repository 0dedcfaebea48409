//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera feel, lighting rig, rain density) are
//! consolidated here. Options serialize to/from TOML; every section uses
//! `#[serde(default)]` so a partial file overriding only `[rain]` works.

mod camera;
mod lighting;
mod rain;

use std::path::Path;

pub use camera::CameraOptions;
pub use lighting::LightingOptions;
pub use rain::RainOptions;
use serde::{Deserialize, Serialize};

use crate::error::DownpourError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Orbit camera projection and control parameters.
    pub camera: CameraOptions,
    /// Night lighting rig and fog parameters.
    pub lighting: LightingOptions,
    /// Rain particle parameters.
    pub rain: RainOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DownpourError::Io`] when the file cannot be read and
    /// [`DownpourError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, DownpourError> {
        let content = std::fs::read_to_string(path).map_err(DownpourError::Io)?;
        toml::from_str(&content)
            .map_err(|e| DownpourError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`DownpourError::OptionsParse`] on serialization failure
    /// and [`DownpourError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), DownpourError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DownpourError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DownpourError::Io)?;
        }
        std::fs::write(path, content).map_err(DownpourError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[rain]
count = 4000
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.rain.count, 4000);
        // Everything else should be default
        assert_eq!(opts.rain.velocity, 2.0);
        assert_eq!(opts.camera.max_distance, 80.0);
        assert_eq!(opts.lighting.fog_density, 0.015);
    }

    #[test]
    fn distance_bounds_are_ordered() {
        let opts = CameraOptions::default();
        assert!(opts.min_distance < opts.max_distance);
        assert!(
            opts.initial_distance >= opts.min_distance
                && opts.initial_distance <= opts.max_distance
        );
    }
}
