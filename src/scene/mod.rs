//! Scene assembly.
//!
//! Stages everything the mesh renderer draws: the procedural tableau
//! (grass slab, concrete lot, painted parking lines, moon sphere) plus the
//! glTF props listed in the manifest. Staging is CPU-only; the renderer
//! uploads the result once at startup. A prop that fails to load is
//! logged and skipped — the scene simply appears without it.

/// Procedural mesh generators.
pub mod geometry;
/// glTF prop import.
pub mod loader;
/// TOML manifest of prop placements.
pub mod manifest;

use glam::{Mat4, Quat, Vec3};

use self::geometry::MeshData;
use self::manifest::SceneManifest;

// Tableau dimensions and placements
const GRASS_SIZE: f32 = 70.0;
const GRASS_THICKNESS: f32 = 1.0;
const GRASS_UV_REPEAT: f32 = 10.0;
const LOT_SIZE: f32 = 40.0;
const LOT_UV_REPEAT: f32 = 5.0;
const LINE_WIDTH: f32 = 8.0;
const LINE_HEIGHT: f32 = 0.01;
const LINE_DEPTH: f32 = 0.2;
const LINE_COUNT: usize = 3;
const LINE_SPACING: f32 = 6.0;
const MOON_RADIUS: f32 = 8.0;
const MOON_POSITION: [f32; 3] = [20.0, 30.0, -35.0];

const GRASS_TEXTURE: &str = "assets/textures/grass.jpg";
const CONCRETE_TEXTURE: &str = "assets/textures/concrete.jpg";

/// Where a material's texture comes from.
#[derive(Debug, Clone)]
pub enum TextureSource {
    /// An image file on disk (missing files fall back to plain white).
    File(String),
    /// RGBA8 pixels decoded out of a glTF document.
    Rgba {
        /// Tightly-packed RGBA8 pixel data.
        pixels: Vec<u8>,
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
}

/// Base-color material: a factor, an optional texture, and an unlit flag
/// (the moon ignores the lighting rig entirely).
#[derive(Debug, Clone)]
pub struct Material {
    /// RGBA base color factor, multiplied with the texture sample.
    pub base_color: [f32; 4],
    /// Skip lighting and fog-only shade when set.
    pub unlit: bool,
    /// Optional base color texture.
    pub texture: Option<TextureSource>,
}

impl Material {
    /// Opaque lit material with a solid color and no texture.
    #[must_use]
    pub fn solid(rgb: [f32; 3]) -> Self {
        Self {
            base_color: [rgb[0], rgb[1], rgb[2], 1.0],
            unlit: false,
            texture: None,
        }
    }
}

/// A mesh ready for GPU upload: data, material, and model matrix.
pub struct StagedMesh {
    /// Name used in logs.
    pub name: String,
    /// CPU mesh data.
    pub mesh: MeshData,
    /// Material for the whole mesh.
    pub material: Material,
    /// Model (object-to-world) matrix.
    pub transform: Mat4,
}

/// The assembled static scene.
pub struct Scene {
    /// Staged meshes in draw order.
    pub meshes: Vec<StagedMesh>,
}

impl Scene {
    /// Build the tableau and load the manifest's props.
    ///
    /// Never fails: each prop that cannot be loaded is logged via
    /// `log::error!` and left out of the scene.
    #[must_use]
    pub fn assemble(manifest: &SceneManifest) -> Self {
        let mut meshes = Vec::new();

        stage_grounds(&mut meshes);
        stage_parking_lines(&mut meshes);
        stage_moon(&mut meshes);

        for placement in &manifest.models {
            match loader::load_model(&placement.path) {
                Ok(primitives) => {
                    log::info!(
                        "loaded {} ({} primitives)",
                        placement.name,
                        primitives.len()
                    );
                    let base = placement.matrix();
                    for prim in primitives {
                        meshes.push(StagedMesh {
                            name: placement.name.clone(),
                            mesh: prim.mesh,
                            material: prim.material,
                            transform: base * prim.transform,
                        });
                    }
                }
                Err(e) => {
                    log::error!(
                        "failed to load {}: {e}; scene continues without it",
                        placement.name
                    );
                }
            }
        }

        log::debug!("scene staged: {} meshes", meshes.len());
        Self { meshes }
    }
}

/// Grass slab under everything, concrete lot sitting just above it.
fn stage_grounds(meshes: &mut Vec<StagedMesh>) {
    let mut grass = Material::solid([0.302, 0.357, 0.255]);
    grass.texture = Some(TextureSource::File(GRASS_TEXTURE.to_owned()));
    meshes.push(StagedMesh {
        name: "Grass".to_owned(),
        mesh: geometry::box_mesh(GRASS_SIZE, GRASS_THICKNESS, GRASS_SIZE, GRASS_UV_REPEAT),
        material: grass,
        // Top face flush with y = 0
        transform: Mat4::from_translation(Vec3::new(0.0, -GRASS_THICKNESS / 2.0, 0.0)),
    });

    let mut concrete = Material::solid([0.165, 0.165, 0.165]);
    concrete.texture = Some(TextureSource::File(CONCRETE_TEXTURE.to_owned()));
    meshes.push(StagedMesh {
        name: "Parking Lot".to_owned(),
        mesh: geometry::plane_mesh(LOT_SIZE, LOT_SIZE, LOT_UV_REPEAT),
        material: concrete,
        // Slightly above the grass to avoid z-fighting
        transform: Mat4::from_translation(Vec3::new(0.0, 0.01, 0.0)),
    });
}

/// Three painted stall dividers, angled with the van.
fn stage_parking_lines(meshes: &mut Vec<StagedMesh>) {
    let line = geometry::box_mesh(LINE_WIDTH, LINE_HEIGHT, LINE_DEPTH, 1.0);
    for i in 0..LINE_COUNT {
        meshes.push(StagedMesh {
            name: format!("Parking Line {}", i + 1),
            mesh: line.clone(),
            material: Material::solid([0.8, 0.8, 0.8]),
            transform: Mat4::from_rotation_translation(
                Quat::from_rotation_y(std::f32::consts::PI / 100.0),
                Vec3::new(5.0, 0.02, 14.0 - i as f32 * LINE_SPACING),
            ),
        });
    }
}

/// Unlit white moon, doubling as the anchor for the moon point light.
fn stage_moon(meshes: &mut Vec<StagedMesh>) {
    meshes.push(StagedMesh {
        name: "Moon".to_owned(),
        mesh: geometry::icosphere(MOON_RADIUS, 3),
        material: Material {
            base_color: [1.0, 1.0, 1.0, 1.0],
            unlit: true,
            texture: None,
        },
        transform: Mat4::from_translation(Vec3::from_array(MOON_POSITION)),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Manifest pointing at files that do not exist — staging must still
    /// produce the full procedural tableau.
    #[test]
    fn missing_props_do_not_fail_assembly() {
        let scene = Scene::assemble(&SceneManifest::default());
        // grass + lot + 3 lines + moon
        assert_eq!(scene.meshes.len(), 6);
    }

    #[test]
    fn tableau_layering_avoids_z_fighting() {
        let scene = Scene::assemble(&SceneManifest {
            models: Vec::new(),
        });
        let lot = scene
            .meshes
            .iter()
            .find(|m| m.name == "Parking Lot")
            .unwrap();
        let lot_y = lot.transform.transform_point3(Vec3::ZERO).y;
        let line = scene
            .meshes
            .iter()
            .find(|m| m.name.starts_with("Parking Line"))
            .unwrap();
        let line_y = line.transform.transform_point3(Vec3::ZERO).y;
        assert!(lot_y > 0.0, "lot sits above the grass top");
        assert!(line_y > lot_y, "lines sit above the lot");
    }

    #[test]
    fn parking_lines_march_down_the_lot() {
        let scene = Scene::assemble(&SceneManifest {
            models: Vec::new(),
        });
        let zs: Vec<f32> = scene
            .meshes
            .iter()
            .filter(|m| m.name.starts_with("Parking Line"))
            .map(|m| m.transform.transform_point3(Vec3::ZERO).z)
            .collect();
        assert_eq!(zs.len(), 3);
        assert!((zs[0] - 14.0).abs() < 1e-5);
        assert!((zs[1] - 8.0).abs() < 1e-5);
        assert!((zs[2] - 2.0).abs() < 1e-5);
    }

    #[test]
    fn moon_is_unlit() {
        let scene = Scene::assemble(&SceneManifest {
            models: Vec::new(),
        });
        let moon = scene.meshes.iter().find(|m| m.name == "Moon").unwrap();
        assert!(moon.material.unlit);
        assert!(moon.material.texture.is_none());
    }
}
