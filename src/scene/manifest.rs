//! Scene manifest: which glTF props to place, and where.
//!
//! The manifest is the only external configuration of scene content. It is
//! consumed once at startup; the engine never mutates or persists it.

use std::path::Path;

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::DownpourError;

fn default_scale() -> f32 {
    1.0
}

/// One prop: a model file and its placement in the tableau.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelPlacement {
    /// Path to a `.glb`/`.gltf` file.
    pub path: String,
    /// Human-readable name used in load logging.
    pub name: String,
    /// World position of the model origin.
    pub position: [f32; 3],
    /// Rotation around the vertical axis, in radians.
    #[serde(default)]
    pub rotation_y: f32,
    /// Uniform scale factor.
    #[serde(default = "default_scale")]
    pub scale: f32,
}

impl ModelPlacement {
    /// Model matrix for this placement: scale, then Y-rotation, then
    /// translation.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.rotation_y),
            Vec3::from_array(self.position),
        )
    }
}

/// The list of props to stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneManifest {
    /// Props in draw order.
    pub models: Vec<ModelPlacement>,
}

impl SceneManifest {
    /// Load a manifest from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DownpourError::Io`] when the file cannot be read and
    /// [`DownpourError::ManifestParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, DownpourError> {
        let content = std::fs::read_to_string(path).map_err(DownpourError::Io)?;
        toml::from_str(&content)
            .map_err(|e| DownpourError::ManifestParse(e.to_string()))
    }
}

impl Default for SceneManifest {
    /// The stock parking-lot tableau.
    fn default() -> Self {
        Self {
            models: vec![
                ModelPlacement {
                    path: "assets/models/small_store.glb".to_owned(),
                    name: "Small Store".to_owned(),
                    position: [-10.0, 0.0, 10.0],
                    rotation_y: 0.0,
                    scale: 3.5,
                },
                ModelPlacement {
                    path: "assets/models/gas_pump.glb".to_owned(),
                    name: "Gas Pump".to_owned(),
                    position: [5.0, 0.0, -15.0],
                    rotation_y: std::f32::consts::PI / 100.0,
                    scale: 3.0,
                },
                ModelPlacement {
                    path: "assets/models/van.glb".to_owned(),
                    name: "Van".to_owned(),
                    position: [5.0, 0.0, -9.0],
                    rotation_y: std::f32::consts::PI / 100.0,
                    scale: 3.0,
                },
                ModelPlacement {
                    path: "assets/models/male_survivor.glb".to_owned(),
                    name: "Male Survivor".to_owned(),
                    position: [0.0, 0.05, 5.0],
                    rotation_y: 0.0,
                    scale: 3.5,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_tableau_has_four_props() {
        let manifest = SceneManifest::default();
        assert_eq!(manifest.models.len(), 4);
        assert!(manifest.models.iter().all(|m| m.path.ends_with(".glb")));
    }

    #[test]
    fn parses_minimal_entry_with_defaults() {
        let toml_str = r#"
[[models]]
path = "assets/models/dumpster.glb"
name = "Dumpster"
position = [3.0, 0.0, -2.0]
"#;
        let manifest: SceneManifest = toml::from_str(toml_str).unwrap();
        assert_eq!(manifest.models.len(), 1);
        assert_eq!(manifest.models[0].rotation_y, 0.0);
        assert_eq!(manifest.models[0].scale, 1.0);
    }

    #[test]
    fn placement_matrix_translates_origin() {
        let placement = ModelPlacement {
            path: String::new(),
            name: String::new(),
            position: [5.0, 0.0, -9.0],
            rotation_y: 0.3,
            scale: 3.0,
        };
        let world = placement.matrix().transform_point3(Vec3::ZERO);
        assert!((world - Vec3::new(5.0, 0.0, -9.0)).length() < 1e-6);
    }

    #[test]
    fn placement_matrix_applies_uniform_scale() {
        let placement = ModelPlacement {
            path: String::new(),
            name: String::new(),
            position: [0.0, 0.0, 0.0],
            rotation_y: 0.0,
            scale: 3.5,
        };
        let p = placement.matrix().transform_point3(Vec3::X);
        assert!((p.length() - 3.5).abs() < 1e-6);
    }

    #[test]
    fn round_trips_through_toml() {
        let manifest = SceneManifest::default();
        let s = toml::to_string_pretty(&manifest).unwrap();
        let parsed: SceneManifest = toml::from_str(&s).unwrap();
        assert_eq!(manifest, parsed);
    }
}
