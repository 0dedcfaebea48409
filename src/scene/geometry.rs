//! Procedural mesh generation for the tableau's non-asset geometry:
//! ground slabs, painted lines, and the moon sphere.

use std::collections::HashMap;

use glam::Vec3;

/// CPU-side mesh: positions, normals, UVs, and a triangle index list.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex normals.
    pub normals: Vec<[f32; 3]>,
    /// Per-vertex texture coordinates.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle list indices.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of triangles in the index list.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Axis-aligned box centered on the origin, 24 vertices (4 per face) so
/// each face gets flat normals and its own UV square. `uv_repeat` tiles
/// the texture across every face.
#[must_use]
pub fn box_mesh(width: f32, height: f32, depth: f32, uv_repeat: f32) -> MeshData {
    let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);

    // (normal, four corners CCW when viewed from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [
                [-hw, -hh, hd],
                [hw, -hh, hd],
                [hw, hh, hd],
                [-hw, hh, hd],
            ],
        ),
        (
            [0.0, 0.0, -1.0],
            [
                [hw, -hh, -hd],
                [-hw, -hh, -hd],
                [-hw, hh, -hd],
                [hw, hh, -hd],
            ],
        ),
        (
            [1.0, 0.0, 0.0],
            [
                [hw, -hh, hd],
                [hw, -hh, -hd],
                [hw, hh, -hd],
                [hw, hh, hd],
            ],
        ),
        (
            [-1.0, 0.0, 0.0],
            [
                [-hw, -hh, -hd],
                [-hw, -hh, hd],
                [-hw, hh, hd],
                [-hw, hh, -hd],
            ],
        ),
        (
            [0.0, 1.0, 0.0],
            [
                [-hw, hh, hd],
                [hw, hh, hd],
                [hw, hh, -hd],
                [-hw, hh, -hd],
            ],
        ),
        (
            [0.0, -1.0, 0.0],
            [
                [-hw, -hh, -hd],
                [hw, -hh, -hd],
                [hw, -hh, hd],
                [-hw, -hh, hd],
            ],
        ),
    ];

    let corner_uvs = [
        [0.0, uv_repeat],
        [uv_repeat, uv_repeat],
        [uv_repeat, 0.0],
        [0.0, 0.0],
    ];

    let mut mesh = MeshData::default();
    for (normal, corners) in &faces {
        let base = mesh.positions.len() as u32;
        for (corner, uv) in corners.iter().zip(&corner_uvs) {
            mesh.positions.push(*corner);
            mesh.normals.push(*normal);
            mesh.uvs.push(*uv);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Flat quad in the XZ plane facing +Y, centered on the origin.
#[must_use]
pub fn plane_mesh(width: f32, depth: f32, uv_repeat: f32) -> MeshData {
    let (hw, hd) = (width / 2.0, depth / 2.0);
    MeshData {
        positions: vec![
            [-hw, 0.0, hd],
            [hw, 0.0, hd],
            [hw, 0.0, -hd],
            [-hw, 0.0, -hd],
        ],
        normals: vec![[0.0, 1.0, 0.0]; 4],
        uvs: vec![
            [0.0, uv_repeat],
            [uv_repeat, uv_repeat],
            [uv_repeat, 0.0],
            [0.0, 0.0],
        ],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

/// Icosphere of the given radius.
///
/// Level 0 = icosahedron (20 triangles), each level quadruples the
/// triangle count. Level 3 (1280 triangles) is plenty for the moon.
#[must_use]
pub fn icosphere(radius: f32, subdivisions: u32) -> MeshData {
    // Golden ratio for icosahedron vertices
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let inv_len = 1.0 / (1.0 + phi * phi).sqrt();

    // 12 vertices of icosahedron (normalized to unit sphere)
    let mut positions: Vec<Vec3> = vec![
        Vec3::new(-1.0, phi, 0.0) * inv_len,
        Vec3::new(1.0, phi, 0.0) * inv_len,
        Vec3::new(-1.0, -phi, 0.0) * inv_len,
        Vec3::new(1.0, -phi, 0.0) * inv_len,
        Vec3::new(0.0, -1.0, phi) * inv_len,
        Vec3::new(0.0, 1.0, phi) * inv_len,
        Vec3::new(0.0, -1.0, -phi) * inv_len,
        Vec3::new(0.0, 1.0, -phi) * inv_len,
        Vec3::new(phi, 0.0, -1.0) * inv_len,
        Vec3::new(phi, 0.0, 1.0) * inv_len,
        Vec3::new(-phi, 0.0, -1.0) * inv_len,
        Vec3::new(-phi, 0.0, 1.0) * inv_len,
    ];

    // 20 triangles of icosahedron (CCW winding for outward-facing normals)
    let mut indices: Vec<u32> = vec![
        0, 5, 11, 0, 1, 5, 0, 7, 1, 0, 10, 7, 0, 11, 10, //
        1, 9, 5, 5, 4, 11, 11, 2, 10, 10, 6, 7, 7, 8, 1, //
        3, 4, 9, 3, 2, 4, 3, 6, 2, 3, 8, 6, 3, 9, 8, //
        4, 5, 9, 2, 11, 4, 6, 10, 2, 8, 7, 6, 9, 1, 8,
    ];

    let mut midpoint_cache: HashMap<(u32, u32), u32> = HashMap::new();

    for _ in 0..subdivisions {
        let mut new_indices = Vec::with_capacity(indices.len() * 4);

        for tri in indices.chunks(3) {
            let (v0, v1, v2) = (tri[0], tri[1], tri[2]);

            let a = midpoint(&mut positions, &mut midpoint_cache, v0, v1);
            let b = midpoint(&mut positions, &mut midpoint_cache, v1, v2);
            let c = midpoint(&mut positions, &mut midpoint_cache, v2, v0);

            new_indices.extend_from_slice(&[v0, a, c]);
            new_indices.extend_from_slice(&[v1, b, a]);
            new_indices.extend_from_slice(&[v2, c, b]);
            new_indices.extend_from_slice(&[a, b, c]);
        }

        indices = new_indices;
    }

    MeshData {
        // Unit sphere: normal = position, scaled out to the radius
        normals: positions.iter().map(|p| p.to_array()).collect(),
        uvs: vec![[0.0, 0.0]; positions.len()],
        positions: positions.iter().map(|p| (*p * radius).to_array()).collect(),
        indices,
    }
}

fn midpoint(
    positions: &mut Vec<Vec3>,
    cache: &mut HashMap<(u32, u32), u32>,
    v0: u32,
    v1: u32,
) -> u32 {
    // Consistent ordering for the cache key
    let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };

    if let Some(&idx) = cache.get(&key) {
        return idx;
    }

    let p0 = positions[v0 as usize];
    let p1 = positions[v1 as usize];
    let mid = ((p0 + p1) * 0.5).normalize();

    let idx = positions.len() as u32;
    positions.push(mid);
    let _ = cache.insert(key, idx);
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_has_one_quad_per_face() {
        let b = box_mesh(2.0, 1.0, 3.0, 1.0);
        assert_eq!(b.positions.len(), 24);
        assert_eq!(b.triangle_count(), 12);
        assert_eq!(b.normals.len(), 24);
        assert_eq!(b.uvs.len(), 24);
    }

    #[test]
    fn box_extents_match_dimensions() {
        let b = box_mesh(70.0, 1.0, 70.0, 10.0);
        for p in &b.positions {
            assert!(p[0].abs() <= 35.0);
            assert!(p[1].abs() <= 0.5);
            assert!(p[2].abs() <= 35.0);
        }
    }

    #[test]
    fn plane_tiles_uvs() {
        let p = plane_mesh(40.0, 40.0, 5.0);
        assert_eq!(p.triangle_count(), 2);
        let max_u = p.uvs.iter().map(|uv| uv[0]).fold(0.0, f32::max);
        assert_eq!(max_u, 5.0);
    }

    #[test]
    fn icosphere_vertices_sit_on_radius() {
        let s = icosphere(8.0, 2);
        for p in &s.positions {
            let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((len - 8.0).abs() < 1e-3, "vertex at radius {len}");
        }
    }

    #[test]
    fn icosphere_subdivision_quadruples_triangles() {
        assert_eq!(icosphere(1.0, 0).triangle_count(), 20);
        assert_eq!(icosphere(1.0, 1).triangle_count(), 80);
        assert_eq!(icosphere(1.0, 2).triangle_count(), 320);
    }

    #[test]
    fn indices_stay_in_bounds() {
        for mesh in [
            box_mesh(1.0, 1.0, 1.0, 1.0),
            plane_mesh(1.0, 1.0, 1.0),
            icosphere(1.0, 3),
        ] {
            let n = mesh.positions.len() as u32;
            assert!(mesh.indices.iter().all(|&i| i < n));
        }
    }
}
