//! glTF prop import.
//!
//! Walks the document's node hierarchy with accumulated transforms and
//! flattens every mesh primitive into CPU mesh data plus a material
//! (base color factor and optional base color texture). Props are static,
//! so skins, animations, and non-color textures are ignored.

use glam::Mat4;

use crate::error::DownpourError;
use crate::gpu::texture::gltf_pixels_to_rgba;
use crate::scene::geometry::MeshData;
use crate::scene::{Material, TextureSource};

/// One flattened primitive: mesh data, material, and the node's world
/// transform within the document.
pub struct LoadedPrimitive {
    /// Flattened vertex/index data.
    pub mesh: MeshData,
    /// Base color material.
    pub material: Material,
    /// Accumulated node transform (applied before the placement matrix).
    pub transform: Mat4,
}

/// Import every mesh primitive from a `.glb`/`.gltf` file.
///
/// # Errors
///
/// Returns [`DownpourError::AssetLoad`] when the file cannot be read or
/// parsed, or contains no usable primitives.
pub fn load_model(path: &str) -> Result<Vec<LoadedPrimitive>, DownpourError> {
    let (doc, buffers, images) = gltf::import(path)
        .map_err(|e| DownpourError::AssetLoad(format!("{path}: {e}")))?;

    let mut primitives = Vec::new();
    let scenes: Vec<gltf::Scene<'_>> = doc
        .default_scene()
        .map_or_else(|| doc.scenes().collect(), |s| vec![s]);
    for scene in scenes {
        for node in scene.nodes() {
            visit_node(&node, Mat4::IDENTITY, &buffers, &images, &mut primitives);
        }
    }

    if primitives.is_empty() {
        return Err(DownpourError::AssetLoad(format!(
            "{path}: no mesh primitives"
        )));
    }
    Ok(primitives)
}

fn visit_node(
    node: &gltf::Node<'_>,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    images: &[gltf::image::Data],
    out: &mut Vec<LoadedPrimitive>,
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if let Some(loaded) = read_primitive(&primitive, world, buffers, images) {
                out.push(loaded);
            }
        }
    }

    for child in node.children() {
        visit_node(&child, world, buffers, images, out);
    }
}

fn read_primitive(
    primitive: &gltf::Primitive<'_>,
    transform: Mat4,
    buffers: &[gltf::buffer::Data],
    images: &[gltf::image::Data],
) -> Option<LoadedPrimitive> {
    let reader = primitive.reader(|buffer| {
        buffers.get(buffer.index()).map(|d| d.0.as_slice())
    });

    let positions: Vec<[f32; 3]> = reader.read_positions()?.collect();
    if positions.is_empty() {
        return None;
    }

    let normals: Vec<[f32; 3]> = reader
        .read_normals()
        .map_or_else(|| vec![[0.0, 1.0, 0.0]; positions.len()], Iterator::collect);
    let uvs: Vec<[f32; 2]> = reader.read_tex_coords(0).map_or_else(
        || vec![[0.0, 0.0]; positions.len()],
        |read| read.into_f32().collect(),
    );
    let indices: Vec<u32> = reader.read_indices().map_or_else(
        // No indices: treat the positions as a raw triangle list
        || (0..positions.len() as u32).collect(),
        |read| read.into_u32().collect(),
    );

    let material = primitive.material();
    let pbr = material.pbr_metallic_roughness();
    let texture = pbr.base_color_texture().and_then(|info| {
        images
            .get(info.texture().source().index())
            .map(|data| TextureSource::Rgba {
                pixels: gltf_pixels_to_rgba(data),
                width: data.width,
                height: data.height,
            })
    });

    Some(LoadedPrimitive {
        mesh: MeshData {
            positions,
            normals,
            uvs,
            indices,
        },
        material: Material {
            base_color: pbr.base_color_factor(),
            unlit: false,
            texture,
        },
        transform,
    })
}
